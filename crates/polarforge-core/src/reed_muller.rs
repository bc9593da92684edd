//! Reed-Muller Code Construction
//!
//! RM(r, m) viewed as a polar-like code: row `j` of the Arikan kernel
//! power `F^{⊗m}` has weight `2^{w(j)}`, where `w(j)` is the Hamming weight
//! of `j`. Selecting all rows of weight at least `2^{m-r}` gives RM(r, m).
//!
//! | Parameter | Value                    |
//! |-----------|--------------------------|
//! | n         | 2^m                      |
//! | k         | Σ_{i=0..r} C(m, i)       |
//! | d_min     | 2^(m-r)                  |
//!
//! ## Example
//!
//! ```rust
//! use polarforge_core::reed_muller::generate_rm_code;
//!
//! let rm = generate_rm_code(1, 3).unwrap();
//! assert_eq!((rm.n, rm.k, rm.d_min), (8, 4, 4));
//! assert_eq!(rm.split.info, vec![3, 5, 6, 7]);
//! ```

use crate::types::{CodeDesign, DesignError, DesignResult, PositionSplit};

/// Largest supported `m` (n = 2^20).
pub const MAX_RM_ORDER: u32 = 20;

/// Reed-Muller code descriptor with its frozen/information split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RmCode {
    /// Order r.
    pub r: u32,
    /// Log2 of the blocklength.
    pub m: u32,
    /// Blocklength 2^m.
    pub n: usize,
    /// Dimension Σ C(m, i), i = 0..=r.
    pub k: usize,
    /// Minimum distance 2^(m - r).
    pub d_min: usize,
    /// Frozen and information positions, ascending.
    pub split: PositionSplit,
}

impl From<RmCode> for CodeDesign {
    fn from(rm: RmCode) -> Self {
        CodeDesign::ReedMuller {
            r: rm.r,
            m: rm.m,
            n: rm.n,
            k: rm.k,
            d_min: rm.d_min,
            split: rm.split,
        }
    }
}

/// Construct RM(r, m).
///
/// Requires `0 <= r <= m <= MAX_RM_ORDER`.
pub fn generate_rm_code(r: i64, m: i64) -> DesignResult<RmCode> {
    if r < 0 {
        return Err(DesignError::NegativeParameter { name: "r", value: r });
    }
    if m < 0 {
        return Err(DesignError::NegativeParameter { name: "m", value: m });
    }
    if r > m || m > MAX_RM_ORDER as i64 {
        return Err(DesignError::InvalidRmOrder {
            r,
            m,
            max_m: MAX_RM_ORDER,
        });
    }
    let (r, m) = (r as u32, m as u32);

    let n = 1usize << m;
    let d_min = 1usize << (m - r);
    let k = (0..=r).map(|i| binomial(m as u64, i as u64)).sum::<u64>() as usize;

    let split = partition_by_weight(k, m);

    // Rows of weight >= 2^(m-r) are exactly the k selected ones
    debug_assert!(split
        .info
        .iter()
        .all(|&j| j.count_ones() >= m - r));
    debug_assert_eq!(split.info.len(), k);

    tracing::debug!(r, m, n, k, d_min, "constructed Reed-Muller code");

    Ok(RmCode {
        r,
        m,
        n,
        k,
        d_min,
        split,
    })
}

/// Indices `0..2^m` ranked by Hamming weight descending, ties by index
/// ascending.
pub fn weight_ranking(m: u32) -> Vec<usize> {
    let n = 1usize << m;
    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&a, &b| b.count_ones().cmp(&a.count_ones()).then(a.cmp(&b)));
    indices
}

/// Split `0..2^m` taking the `k` highest-weight indices as information
/// positions. Ties at the boundary weight go to the smaller index.
///
/// `k` is clamped to `2^m`.
pub fn partition_by_weight(k: usize, m: u32) -> PositionSplit {
    let ranked = weight_ranking(m);
    let k = k.min(ranked.len());

    let mut info = ranked[..k].to_vec();
    let mut frozen = ranked[k..].to_vec();
    info.sort_unstable();
    frozen.sort_unstable();

    PositionSplit { frozen, info }
}

/// Binomial coefficient C(n, k), exact for the ranges used here.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        // result * (n - i) is divisible by (i + 1) at every step
        result = result * (n - i) / (i + 1);
    }
    result
}
