/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Fence Levels
//!
//! Shared building blocks for the fenced accessors of all atomic types.
//!
//! | Level         | Read                              | Write                              |
//! |---------------|-----------------------------------|------------------------------------|
//! | unfenced      | `Relaxed` load                    | `Relaxed` store                    |
//! | acquire       | `Acquire` load                    | -                                  |
//! | release       | -                                 | `Release` store                    |
//! | full          | fence, `SeqCst` load, fence       | fence, `SeqCst` store, fence       |
//! | compiler-only | compiler fences, `Relaxed` load   | compiler fences, `Relaxed` store   |
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::{
    compiler_fence,
    fence,
    Ordering,
};

use crossbeam_utils::Backoff;

/// Runs `access` between two full `SeqCst` fences.
///
/// No memory operation can be reordered across the access in either
/// direction.
#[inline]
pub(crate) fn full<R>(access: impl FnOnce(Ordering) -> R) -> R {
    fence(Ordering::SeqCst);
    let result = access(Ordering::SeqCst);
    fence(Ordering::SeqCst);
    result
}

/// Runs `access` between two compiler-only fences.
///
/// The compiler keeps the access in program order, but no CPU barrier is
/// emitted.
#[inline]
pub(crate) fn compiler_only<R>(access: impl FnOnce(Ordering) -> R) -> R {
    compiler_fence(Ordering::SeqCst);
    let result = access(Ordering::Relaxed);
    compiler_fence(Ordering::SeqCst);
    result
}

/// Optimistic read-compute-swap loop shared by every compound operation
/// that has no native atomic instruction.
///
/// `snapshot` reads the current value under an acquire fence and `swap`
/// attempts a compare-exchange, returning the value it observed. On a lost
/// race the loop backs off, spinning first and yielding once contention
/// persists.
///
/// # Returns
///
/// `(new, original)` where `original` is the snapshot the swap succeeded
/// on.
#[inline]
pub(crate) fn retry_update<T, S, C, F>(snapshot: S, mut swap: C, f: F) -> (T, T)
where
    T: Copy + PartialEq,
    S: Fn() -> T,
    C: FnMut(T, T) -> T,
    F: Fn(T) -> T,
{
    let backoff = Backoff::new();
    loop {
        let original = snapshot();
        let candidate = f(original);
        if swap(candidate, original) == original {
            return (candidate, original);
        }
        if backoff.is_completed() {
            tracing::trace!("compound update still contended, yielding");
        }
        backoff.snooze();
    }
}
