/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Fenced Atomic Reference
//!
//! An atomic slot holding an optional shared reference. The slot never
//! owns its referent: it only stores or substitutes a borrow that outlives
//! the slot itself, so it never clones or frees anything.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::AtomicPtr;
use std::sync::atomic::Ordering;

use crate::atomic::fence;
use crate::atomic::padding::{
    CacheLinePadded,
    Padding,
    Unpadded,
};
use crate::atomic::traits::FencedAtomic;

/// Converts an optional reference into the raw pointer stored in a slot.
#[inline]
pub(crate) fn encode<T>(value: Option<&T>) -> *mut T {
    match value {
        Some(value) => value as *const T as *mut T,
        None => ptr::null_mut(),
    }
}

/// Converts a slot's raw pointer back into an optional reference.
///
/// # Safety
///
/// `raw` must be null or derived from a `&'a T` by [`encode`].
#[inline]
pub(crate) unsafe fn decode<'a, T>(raw: *mut T) -> Option<&'a T> {
    // SAFETY: guaranteed by the caller.
    unsafe { raw.cast_const().as_ref() }
}

/// Fenced atomic reference.
///
/// Holds an `Option<&'a T>` with the same fence levels and
/// compare-exchange contract as the integer types. The compare-exchange
/// comparand matches by identity (address); `PartialEq` between two slots
/// compares their referents by value.
///
/// # Example
///
/// ```rust
/// use prism3_concurrent::AtomicRef;
///
/// #[derive(Debug)]
/// struct Config {
///     timeout: u64,
/// }
///
/// let old = Config { timeout: 1000 };
/// let new = Config { timeout: 2000 };
///
/// let current = AtomicRef::new(Some(&old));
/// let previous = current.exchange(Some(&new));
/// assert_eq!(previous.map(|c| c.timeout), Some(1000));
/// assert_eq!(current.read_acquire_fence().map(|c| c.timeout), Some(2000));
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct FencedRef<'a, T, P: Padding = Unpadded> {
    inner: P::Cell<AtomicPtr<T>>,
    _marker: InvariantBorrow<'a, T>,
}

/// Marks a slot as handing out `&'a T` across threads (`Send`/`Sync` only
/// if `T: Sync`) while keeping `'a` invariant, so a shorter borrow can
/// never be written through a slot typed with a longer one.
pub(crate) type InvariantBorrow<'a, T> = PhantomData<(&'a T, fn(&'a T) -> &'a T)>;

/// Fenced atomic reference stored inline.
pub type AtomicRef<'a, T> = FencedRef<'a, T, Unpadded>;

/// Fenced atomic reference isolated on its own cache line.
pub type PaddedAtomicRef<'a, T> = FencedRef<'a, T, CacheLinePadded>;

impl<'a, T, P: Padding> FencedRef<'a, T, P> {
    /// Creates a new atomic reference.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial reference, or `None` for null.
    #[inline]
    pub fn new(value: Option<&'a T>) -> Self {
        Self {
            inner: P::wrap(AtomicPtr::new(encode(value))),
            _marker: PhantomData,
        }
    }

    #[inline]
    fn load(&self, order: Ordering) -> Option<&'a T> {
        // SAFETY: the slot only ever holds null or pointers encoded from
        // `&'a T`, and it is not exposed for raw writes.
        unsafe { decode(self.inner.load(order)) }
    }

    #[inline]
    fn store(&self, value: Option<&'a T>, order: Ordering) {
        self.inner.store(encode(value), order);
    }

    /// Reads the reference with a `Relaxed` load.
    #[inline]
    pub fn read_unfenced(&self) -> Option<&'a T> {
        self.load(Ordering::Relaxed)
    }

    /// Reads the reference with an `Acquire` load.
    ///
    /// Everything written to the referent before it was published with a
    /// release-fenced write is visible through the returned reference.
    #[inline]
    pub fn read_acquire_fence(&self) -> Option<&'a T> {
        self.load(Ordering::Acquire)
    }

    /// Reads the reference between two full fences.
    #[inline]
    pub fn read_full_fence(&self) -> Option<&'a T> {
        fence::full(|order| self.load(order))
    }

    /// Reads the reference between two compiler-only fences.
    #[inline]
    pub fn read_compiler_only_fence(&self) -> Option<&'a T> {
        fence::compiler_only(|order| self.load(order))
    }

    /// Writes the reference with a `Relaxed` store.
    #[inline]
    pub fn write_unfenced(&self, value: Option<&'a T>) {
        self.store(value, Ordering::Relaxed);
    }

    /// Writes the reference with a `Release` store.
    #[inline]
    pub fn write_release_fence(&self, value: Option<&'a T>) {
        self.store(value, Ordering::Release);
    }

    /// Writes the reference between two full fences.
    #[inline]
    pub fn write_full_fence(&self, value: Option<&'a T>) {
        fence::full(|order| self.store(value, order));
    }

    /// Writes the reference between two compiler-only fences.
    #[inline]
    pub fn write_compiler_only_fence(&self, value: Option<&'a T>) {
        fence::compiler_only(|order| self.store(value, order));
    }

    /// Replaces the reference with `new_value` iff the current one is
    /// `comparand`.
    ///
    /// The comparison is by identity: two distinct referents that compare
    /// equal by value do not match.
    ///
    /// # Parameters
    ///
    /// * `new_value` - The reference to store on success.
    /// * `comparand` - The reference expected to be current.
    ///
    /// # Returns
    ///
    /// The reference observed immediately before the attempt. The swap took
    /// place iff it is identical to `comparand`.
    #[inline]
    pub fn compare_exchange(
        &self,
        new_value: Option<&'a T>,
        comparand: Option<&'a T>,
    ) -> Option<&'a T> {
        let observed = match self.inner.compare_exchange(
            encode(comparand),
            encode(new_value),
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(previous) => previous,
            Err(actual) => actual,
        };
        // SAFETY: see `load`.
        unsafe { decode(observed) }
    }

    /// Unconditionally replaces the reference.
    ///
    /// # Returns
    ///
    /// The previous reference.
    #[inline]
    pub fn exchange(&self, new_value: Option<&'a T>) -> Option<&'a T> {
        let previous = self.inner.swap(encode(new_value), Ordering::SeqCst);
        // SAFETY: see `load`.
        unsafe { decode(previous) }
    }

    /// Returns `true` if the slot currently holds exactly `reference`.
    ///
    /// Reads under a full fence and compares by identity.
    #[inline]
    pub fn is(&self, reference: Option<&T>) -> bool {
        ptr::eq(encode(self.read_full_fence()), encode(reference))
    }
}

impl<'a, T, P: Padding> FencedAtomic for FencedRef<'a, T, P> {
    type Value = Option<&'a T>;

    #[inline]
    fn read_unfenced(&self) -> Option<&'a T> {
        self.read_unfenced()
    }

    #[inline]
    fn read_acquire_fence(&self) -> Option<&'a T> {
        self.read_acquire_fence()
    }

    #[inline]
    fn read_full_fence(&self) -> Option<&'a T> {
        self.read_full_fence()
    }

    #[inline]
    fn read_compiler_only_fence(&self) -> Option<&'a T> {
        self.read_compiler_only_fence()
    }

    #[inline]
    fn write_unfenced(&self, value: Option<&'a T>) {
        self.write_unfenced(value);
    }

    #[inline]
    fn write_release_fence(&self, value: Option<&'a T>) {
        self.write_release_fence(value);
    }

    #[inline]
    fn write_full_fence(&self, value: Option<&'a T>) {
        self.write_full_fence(value);
    }

    #[inline]
    fn write_compiler_only_fence(&self, value: Option<&'a T>) {
        self.write_compiler_only_fence(value);
    }

    #[inline]
    fn compare_exchange(&self, new_value: Option<&'a T>, comparand: Option<&'a T>) -> Option<&'a T> {
        self.compare_exchange(new_value, comparand)
    }

    #[inline]
    fn exchange(&self, new_value: Option<&'a T>) -> Option<&'a T> {
        self.exchange(new_value)
    }
}

impl<'a, T, P: Padding> Default for FencedRef<'a, T, P> {
    #[inline]
    fn default() -> Self {
        Self::new(None)
    }
}

impl<'a, T, P: Padding> From<&'a T> for FencedRef<'a, T, P> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::new(Some(value))
    }
}

impl<'a, T: PartialEq, P: Padding> PartialEq for FencedRef<'a, T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.read_full_fence() == other.read_full_fence()
    }
}

impl<'a, T: fmt::Debug, P: Padding> fmt::Debug for FencedRef<'a, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicRef")
            .field("value", &self.read_full_fence())
            .finish()
    }
}

impl<'a, T: fmt::Display, P: Padding> fmt::Display for FencedRef<'a, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.read_full_fence() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("null"),
        }
    }
}
