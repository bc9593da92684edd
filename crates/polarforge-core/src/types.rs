//! Core types for code construction
//!
//! Every construction in this crate produces a [`PositionSplit`]: the
//! partition of the codeword index space `0..n` into frozen positions
//! (fixed to zero) and information positions (carrying payload).
//!
//! ```text
//!  index:   0   1   2   3   4   5   6   7
//!           F   F   F   I   F   I   I   I      N = 8, K = 4
//!           └── frozen ──┘     └── info ──┘
//! ```
//!
//! All parameter errors share one taxonomy, [`DesignError`]. Each variant
//! carries the offending values so the caller can correct the request.

use serde::{Deserialize, Serialize};

/// Result type for code construction.
pub type DesignResult<T> = Result<T, DesignError>;

/// Invalid code parameters.
///
/// Raised synchronously before any construction work starts; there is
/// never a partially built result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesignError {
    #[error("Negative parameter: {name} = {value}")]
    NegativeParameter { name: &'static str, value: i64 },

    #[error("Blocklength n = {0} is not a power of two")]
    NotPowerOfTwo(i64),

    #[error("Blocklength n = {n} outside supported range [{min}, {max}]")]
    BlocklengthOutOfRange { n: i64, min: i64, max: i64 },

    #[error("Information length k = {k} exceeds blocklength n = {n}")]
    InfoLengthExceedsBlocklength { k: i64, n: i64 },

    #[error("Invalid Reed-Muller order: r = {r}, m = {m} (need 0 <= r <= m <= {max_m})")]
    InvalidRmOrder { r: i64, m: i64, max_m: u32 },

    #[error("Kronecker lift {n_lift} too large (max {max})")]
    LiftTooLarge { n_lift: u32, max: u32 },

    #[error("Invalid frozen set for n = {n}: {reason}")]
    InvalidFrozenSet { n: usize, reason: String },
}

impl DesignError {
    /// Short name of the violated constraint.
    pub fn constraint(&self) -> &'static str {
        match self {
            DesignError::NegativeParameter { .. } => "non-negative",
            DesignError::NotPowerOfTwo(_) => "power-of-two",
            DesignError::BlocklengthOutOfRange { .. } => "blocklength-range",
            DesignError::InfoLengthExceedsBlocklength { .. } => "k-le-n",
            DesignError::InvalidRmOrder { .. } => "rm-order",
            DesignError::LiftTooLarge { .. } => "lift-range",
            DesignError::InvalidFrozenSet { .. } => "frozen-set",
        }
    }
}

/// Ordering of the returned position vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionOrder {
    /// Ascending bit index (default).
    #[default]
    Ascending,
    /// Ascending reliability (least reliable first) as produced by the ranking.
    Reliability,
}

/// Partition of `0..n` into frozen and information positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSplit {
    /// Positions forced to zero.
    pub frozen: Vec<usize>,
    /// Positions carrying payload bits.
    pub info: Vec<usize>,
}

impl PositionSplit {
    /// Blocklength N (size of the index space).
    pub fn block_size(&self) -> usize {
        self.frozen.len() + self.info.len()
    }

    /// Number of information bits K.
    pub fn num_info_bits(&self) -> usize {
        self.info.len()
    }

    /// Code rate K/N.
    pub fn rate(&self) -> f64 {
        let n = self.block_size();
        if n == 0 {
            0.0
        } else {
            self.info.len() as f64 / n as f64
        }
    }

    /// Frozen bit mask (true = frozen), indexed by position.
    ///
    /// Frozen entries outside `0..block_size()` are ignored.
    pub fn frozen_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.block_size()];
        for &pos in &self.frozen {
            if let Some(slot) = mask.get_mut(pos) {
                *slot = true;
            }
        }
        mask
    }

    /// Check the partition invariant: disjoint sets whose union is `0..n`.
    pub fn is_partition_of(&self, n: usize) -> bool {
        if self.block_size() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &pos in self.frozen.iter().chain(self.info.iter()) {
            if pos >= n || seen[pos] {
                return false;
            }
            seen[pos] = true;
        }
        true
    }
}

/// A finished construction with its scalar code parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum CodeDesign {
    /// 5G NR polar code.
    Polar5g {
        n: usize,
        k: usize,
        #[serde(flatten)]
        split: PositionSplit,
    },
    /// Reed-Muller code RM(r, m).
    ReedMuller {
        r: u32,
        m: u32,
        n: usize,
        k: usize,
        d_min: usize,
        #[serde(flatten)]
        split: PositionSplit,
    },
}

impl CodeDesign {
    pub fn n(&self) -> usize {
        match self {
            CodeDesign::Polar5g { n, .. } | CodeDesign::ReedMuller { n, .. } => *n,
        }
    }

    pub fn k(&self) -> usize {
        match self {
            CodeDesign::Polar5g { k, .. } | CodeDesign::ReedMuller { k, .. } => *k,
        }
    }

    pub fn split(&self) -> &PositionSplit {
        match self {
            CodeDesign::Polar5g { split, .. } | CodeDesign::ReedMuller { split, .. } => split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_partition_check() {
        let split = PositionSplit {
            frozen: vec![0, 1, 2, 4],
            info: vec![3, 5, 6, 7],
        };
        assert!(split.is_partition_of(8));
        assert!(!split.is_partition_of(16));
        assert_relative_eq!(split.rate(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_partition_rejects_overlap() {
        let split = PositionSplit {
            frozen: vec![0, 1],
            info: vec![1, 3],
        };
        assert!(!split.is_partition_of(4));
    }

    #[test]
    fn test_frozen_mask() {
        let split = PositionSplit {
            frozen: vec![0, 2],
            info: vec![1, 3],
        };
        assert_eq!(split.frozen_mask(), vec![true, false, true, false]);
    }

    #[test]
    fn test_frozen_mask_skips_out_of_range() {
        let split = PositionSplit {
            frozen: vec![0, 9],
            info: vec![1, 2],
        };
        assert_eq!(split.frozen_mask(), vec![true, false, false, false]);
    }

    #[test]
    fn test_error_constraint_names() {
        assert_eq!(DesignError::NotPowerOfTwo(31).constraint(), "power-of-two");
        let err = DesignError::InfoLengthExceedsBlocklength { k: 33, n: 32 };
        assert_eq!(err.constraint(), "k-le-n");
        assert!(err.to_string().contains("k = 33"));
    }
}
