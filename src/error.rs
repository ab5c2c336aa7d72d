/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Errors
//!
//! Error type shared by the constructors and decoders of this crate.
//!
//! # Author
//!
//! Haixing Hu

/// Result type for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, ConcurrentError>;

/// Errors reported by the atomic types and the circular buffer.
///
/// Contention is never reported as an error: the retry loops inside the
/// compound operations always run to completion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConcurrentError {
    /// A circular buffer was requested with a capacity below one.
    #[error("capacity must be at least 1, got {0}")]
    CapacityOutOfRange(i64),

    /// A reference array was requested with a length below one.
    #[error("array length must be at least 1, got {0}")]
    LengthOutOfRange(usize),

    /// An atomic boolean slot held a value other than 0 or 1.
    #[error("encoded boolean must be 0 or 1, found {0}")]
    BoolOutOfRange(i32),

    /// No power of two representable as `i64` is at least the input.
    #[error("no representable power of two is greater than or equal to {0}")]
    PowerOfTwoOverflow(i64),
}
