/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Padding Policies
//!
//! Every atomic type in this crate is written once and parameterized on a
//! [`Padding`] policy deciding how its guarded value is laid out:
//!
//! - [`Unpadded`] stores the value inline, with no extra footprint.
//! - [`CacheLinePadded`] places the value at an offset of one cache line
//!   inside a block of at least two cache lines, so it never shares a line
//!   with a neighbouring field or with an adjacent instance.
//!
//! The policy changes layout only. Both layouts expose identical behavior.
//!
//! # Author
//!
//! Haixing Hu

use std::ops::Deref;

/// Cache line size assumed by [`CacheLinePadded`].
pub const CACHE_LINE_SIZE: usize = 64;

mod private {
    pub trait Sealed {}
}

/// Layout policy for the guarded value of an atomic type.
///
/// This trait is sealed; the two policies are [`Unpadded`] and
/// [`CacheLinePadded`].
pub trait Padding: private::Sealed {
    /// The cell wrapping a guarded value of type `A`.
    type Cell<A>: Deref<Target = A>;

    /// Wraps `value` into this policy's cell.
    fn wrap<A>(value: A) -> Self::Cell<A>;
}

/// Stores the guarded value inline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpadded;

/// Isolates the guarded value on its own cache line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheLinePadded;

impl private::Sealed for Unpadded {}
impl private::Sealed for CacheLinePadded {}

impl Padding for Unpadded {
    type Cell<A> = Inline<A>;

    #[inline]
    fn wrap<A>(value: A) -> Inline<A> {
        Inline(value)
    }
}

impl Padding for CacheLinePadded {
    type Cell<A> = CacheLineIsolated<A>;

    #[inline]
    fn wrap<A>(value: A) -> CacheLineIsolated<A> {
        CacheLineIsolated {
            _lead: [0; CACHE_LINE_SIZE],
            value,
        }
    }
}

/// A value stored with no padding.
#[repr(transparent)]
pub struct Inline<A>(A);

impl<A> Deref for Inline<A> {
    type Target = A;

    #[inline]
    fn deref(&self) -> &A {
        &self.0
    }
}

/// A value isolated on its own cache line.
///
/// # Memory Layout
///
/// ```text
/// |--------------------|----------------------------|
/// | lead (64 bytes)    | value | tail padding       |
/// |--------------------|----------------------------|
/// ^ line boundary      ^ line boundary
/// ```
///
/// The block is aligned to [`CACHE_LINE_SIZE`] and its size is a multiple
/// of it, so the value starts a fresh line and the tail padding keeps the
/// next allocation off that line.
#[repr(C, align(64))]
pub struct CacheLineIsolated<A> {
    _lead: [u8; CACHE_LINE_SIZE],
    value: A,
}

impl<A> Deref for CacheLineIsolated<A> {
    type Target = A;

    #[inline]
    fn deref(&self) -> &A {
        &self.value
    }
}
