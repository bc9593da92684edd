//! 5G NR Polar Code Construction
//!
//! Selects frozen and information bit positions for a polar code of
//! blocklength `n` with `k` information bits, using the reliability
//! sequence of 3GPP TS 38.212 §5.3.1.2.
//!
//! ## Algorithm
//!
//! 1. Take the N_max = 1024 sequence (least reliable first)
//! 2. Drop every channel index `>= n`, keeping the relative order
//! 3. The first `n - k` channels are frozen, the last `k` carry information
//!
//! Rate matching (puncturing/shortening) is not applied: every position in
//! `0..n` is eligible.
//!
//! ## Example
//!
//! ```rust
//! use polarforge_core::polar::generate_5g_ranking;
//!
//! let split = generate_5g_ranking(16, 32).unwrap();
//! assert_eq!(split.frozen.len(), 16);
//! assert_eq!(split.info.len(), 16);
//! assert!(split.info.contains(&31));
//! assert!(split.frozen.contains(&0));
//! ```

use crate::reliability::ReliabilitySequence;
use crate::types::{DesignError, DesignResult, PositionOrder, PositionSplit};
use crate::validate::validate;

/// Frozen/information split for a 5G polar code, positions ascending.
pub fn generate_5g_ranking(k: i64, n: i64) -> DesignResult<PositionSplit> {
    generate_5g_ranking_with(k, n, PositionOrder::Ascending, ReliabilitySequence::nr5g())
}

/// Frozen/information split with explicit output order and reliability sequence.
///
/// With [`PositionOrder::Reliability`] both vectors are in ascending
/// reliability order: `frozen[0]` is the least reliable channel and
/// `info.last()` the most reliable one.
pub fn generate_5g_ranking_with(
    k: i64,
    n: i64,
    order: PositionOrder,
    sequence: &ReliabilitySequence,
) -> DesignResult<PositionSplit> {
    validate(k, n)?;
    if n as usize > sequence.len() {
        return Err(DesignError::BlocklengthOutOfRange {
            n,
            min: crate::validate::MIN_BLOCK_SIZE,
            max: sequence.len() as i64,
        });
    }
    let (k, n) = (k as usize, n as usize);

    let ranked: Vec<usize> = sequence.restrict(n).collect();
    debug_assert_eq!(ranked.len(), n);

    let num_frozen = n - k;
    let mut frozen = ranked[..num_frozen].to_vec();
    let mut info = ranked[num_frozen..].to_vec();

    if order == PositionOrder::Ascending {
        frozen.sort_unstable();
        info.sort_unstable();
    }

    tracing::debug!(k, n, frozen = frozen.len(), "constructed 5G polar code");

    Ok(PositionSplit { frozen, info })
}

/// Reliability order of channels `0..n` (least reliable first) for a valid
/// 5G blocklength.
pub fn reliability_order(n: i64) -> DesignResult<Vec<usize>> {
    validate(0, n)?;
    Ok(ReliabilitySequence::nr5g().restrict(n as usize).collect())
}
