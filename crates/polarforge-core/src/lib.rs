//! # Polar and Reed-Muller Code Construction
//!
//! This crate computes which bit positions of a length-`N` codeword carry
//! information and which are frozen to zero, for two code families:
//!
//! - **5G NR Polar codes**: channel ranking from the reliability sequence
//!   of 3GPP TS 38.212, restricted to the requested blocklength
//! - **Reed-Muller codes**: RM(r, m) selected by row weight of the
//!   Arikan kernel power, with closed-form (n, k, d_min)
//!
//! The encoder and decoder that consume the position sets are out of scope;
//! [`kernel`] offers the transform and dense matrices for callers that
//! want to build one.
//!
//! ## Construction Flow
//!
//! ```text
//! (k, n) → validate → restrict 5G sequence to 0..n → split n-k | k → PositionSplit
//! (r, m) → check order → rank 0..2^m by Hamming weight → split → RmCode
//! ```
//!
//! Every construction is a pure function of its inputs. The only shared
//! state is the embedded reliability table, checked once on first use.
//!
//! ## Example
//!
//! ```rust
//! use polarforge_core::{generate_5g_ranking, generate_rm_code, validate};
//!
//! assert!(validate(1000, 1024).is_ok());
//!
//! let split = generate_5g_ranking(100, 256).unwrap();
//! assert_eq!(split.info.len(), 100);
//! assert_eq!(split.frozen.len(), 156);
//!
//! let rm = generate_rm_code(2, 4).unwrap();
//! assert_eq!((rm.n, rm.k, rm.d_min), (16, 11, 4));
//! ```

pub mod batch;
pub mod config;
pub mod kernel;
pub mod observe;
pub mod polar;
pub mod reed_muller;
pub mod reliability;
pub mod types;
pub mod validate;

pub use batch::{run_batch, DesignReport, DesignRequest};
pub use config::{ConfigError, ForgeConfig};
pub use kernel::{dense_polar, polar_transform, polar_transform_matrix, BinaryMatrix, DensePolar};
pub use polar::{generate_5g_ranking, generate_5g_ranking_with, reliability_order};
pub use reed_muller::{binomial, generate_rm_code, partition_by_weight, weight_ranking, RmCode};
pub use reliability::{ReliabilitySequence, TableError};
pub use types::{CodeDesign, DesignError, DesignResult, PositionOrder, PositionSplit};
pub use validate::validate;

/// Prelude for common imports
pub mod prelude {
    pub use crate::polar::generate_5g_ranking;
    pub use crate::reed_muller::{generate_rm_code, RmCode};
    pub use crate::types::{DesignError, DesignResult, PositionOrder, PositionSplit};
    pub use crate::validate::validate;
}
