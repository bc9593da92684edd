//! Parameter validation for 5G polar code construction
//!
//! `k` and `n` are plain integers: a fractional blocklength cannot be
//! passed at all. What remains to check at runtime is sign, the
//! power-of-two structure of `n`, the 5G NR blocklength range and `k <= n`.

use crate::types::{DesignError, DesignResult};

/// Smallest polar blocklength supported by the 5G NR design.
pub const MIN_BLOCK_SIZE: i64 = 32;

/// Largest polar blocklength supported by the 5G NR design (N_max).
pub const MAX_BLOCK_SIZE: i64 = 1024;

/// Validate polar code parameters `(k, n)`.
///
/// Checks run in a fixed order and stop at the first violation:
/// sign of `k` and `n`, `n` a power of two, `n` in `[32, 1024]`, `k <= n`.
///
/// ```rust
/// use polarforge_core::validate::validate;
///
/// assert!(validate(10, 32).is_ok());
/// assert!(validate(10, 31).is_err());
/// ```
pub fn validate(k: i64, n: i64) -> DesignResult<()> {
    if k < 0 {
        return Err(DesignError::NegativeParameter { name: "k", value: k });
    }
    if n < 0 {
        return Err(DesignError::NegativeParameter { name: "n", value: n });
    }
    if !(n as u64).is_power_of_two() {
        return Err(DesignError::NotPowerOfTwo(n));
    }
    if !(MIN_BLOCK_SIZE..=MAX_BLOCK_SIZE).contains(&n) {
        return Err(DesignError::BlocklengthOutOfRange {
            n,
            min: MIN_BLOCK_SIZE,
            max: MAX_BLOCK_SIZE,
        });
    }
    if k > n {
        return Err(DesignError::InfoLengthExceedsBlocklength { k, n });
    }
    Ok(())
}
