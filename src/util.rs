/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Utilities
//!
//! Numeric helpers used when sizing the circular buffer.
//!
//! # Author
//!
//! Haixing Hu

use crate::error::{
    ConcurrentError,
    Result,
};

/// The largest power of two representable as `i64`.
const MAX_POWER_OF_TWO: i64 = 1 << 62;

/// Returns the smallest power of two greater than or equal to `n`.
///
/// # Parameters
///
/// * `n` - The value to round up.
///
/// # Returns
///
/// `Ok(0)` if `n <= 0`, otherwise the smallest power of two `>= n`.
///
/// # Errors
///
/// Returns [`ConcurrentError::PowerOfTwoOverflow`] if `n` is larger than
/// `2^62`, the largest power of two an `i64` can hold.
pub fn next_power_of_two(n: i64) -> Result<i64> {
    if n <= 0 {
        return Ok(0);
    }
    if n > MAX_POWER_OF_TWO {
        return Err(ConcurrentError::PowerOfTwoOverflow(n));
    }
    // `n` is in 1..=2^62, so the cast and the rounding cannot overflow.
    Ok((n as u64).next_power_of_two() as i64)
}
