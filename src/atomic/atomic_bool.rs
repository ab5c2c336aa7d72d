/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Fenced Atomic Boolean
//!
//! A boolean stored in a 32-bit integer slot, encoded as `0` for `false`
//! and `1` for `true`.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicI32 as StdAtomicI32;
use std::sync::atomic::Ordering;

use crate::atomic::fence;
use crate::atomic::padding::{
    CacheLinePadded,
    Padding,
    Unpadded,
};
use crate::atomic::traits::FencedAtomic;
use crate::error::{
    ConcurrentError,
    Result,
};

const FALSE: i32 = 0;
const TRUE: i32 = 1;

/// Decodes a raw boolean slot value.
///
/// # Parameters
///
/// * `raw` - The integer stored in the slot.
///
/// # Returns
///
/// `false` for `0`, `true` for `1`.
///
/// # Errors
///
/// Returns [`ConcurrentError::BoolOutOfRange`] for any other value.
#[inline]
pub fn decode_bool(raw: i32) -> Result<bool> {
    match raw {
        FALSE => Ok(false),
        TRUE => Ok(true),
        other => Err(ConcurrentError::BoolOutOfRange(other)),
    }
}

#[inline]
const fn encode(value: bool) -> i32 {
    if value {
        TRUE
    } else {
        FALSE
    }
}

/// Fenced atomic boolean.
///
/// Offers the same fence levels and compare-exchange contract as the
/// integer types, without arithmetic. Every read path decodes the slot and
/// refuses values other than `0` and `1`.
///
/// # Panics
///
/// Reads panic with [`ConcurrentError::BoolOutOfRange`] if the slot was
/// corrupted through [`inner`](Self::inner). The type's own operations
/// never store anything but `0` or `1`.
///
/// # Example
///
/// ```rust
/// use prism3_concurrent::AtomicBool;
/// use std::sync::Arc;
/// use std::thread;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let flag_clone = flag.clone();
///
/// let handle = thread::spawn(move || {
///     flag_clone.write_release_fence(true);
/// });
///
/// handle.join().unwrap();
/// assert!(flag.read_acquire_fence());
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct FencedBool<P: Padding = Unpadded> {
    inner: P::Cell<StdAtomicI32>,
}

/// Fenced atomic boolean stored inline.
pub type AtomicBool = FencedBool<Unpadded>;

/// Fenced atomic boolean isolated on its own cache line.
pub type PaddedAtomicBool = FencedBool<CacheLinePadded>;

impl<P: Padding> FencedBool<P> {
    /// Creates a new atomic boolean.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: bool) -> Self {
        Self {
            inner: P::wrap(StdAtomicI32::new(encode(value))),
        }
    }

    #[inline]
    fn decode(raw: i32) -> bool {
        match decode_bool(raw) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Reads the value with a `Relaxed` load.
    #[inline]
    pub fn read_unfenced(&self) -> bool {
        Self::decode(self.inner.load(Ordering::Relaxed))
    }

    /// Reads the value with an `Acquire` load.
    #[inline]
    pub fn read_acquire_fence(&self) -> bool {
        Self::decode(self.inner.load(Ordering::Acquire))
    }

    /// Reads the value between two full fences.
    #[inline]
    pub fn read_full_fence(&self) -> bool {
        Self::decode(fence::full(|order| self.inner.load(order)))
    }

    /// Reads the value between two compiler-only fences.
    #[inline]
    pub fn read_compiler_only_fence(&self) -> bool {
        Self::decode(fence::compiler_only(|order| self.inner.load(order)))
    }

    /// Writes the value with a `Relaxed` store.
    #[inline]
    pub fn write_unfenced(&self, value: bool) {
        self.inner.store(encode(value), Ordering::Relaxed);
    }

    /// Writes the value with a `Release` store.
    #[inline]
    pub fn write_release_fence(&self, value: bool) {
        self.inner.store(encode(value), Ordering::Release);
    }

    /// Writes the value between two full fences.
    #[inline]
    pub fn write_full_fence(&self, value: bool) {
        fence::full(|order| self.inner.store(encode(value), order));
    }

    /// Writes the value between two compiler-only fences.
    #[inline]
    pub fn write_compiler_only_fence(&self, value: bool) {
        fence::compiler_only(|order| self.inner.store(encode(value), order));
    }

    /// Replaces the value with `new_value` iff it currently equals
    /// `comparand`.
    ///
    /// # Parameters
    ///
    /// * `new_value` - The value to store on success.
    /// * `comparand` - The value expected to be current.
    ///
    /// # Returns
    ///
    /// The value observed immediately before the attempt.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_concurrent::AtomicBool;
    ///
    /// let flag = AtomicBool::new(false);
    /// assert!(!flag.compare_exchange(true, false));
    /// assert!(flag.read_full_fence());
    /// ```
    #[inline]
    pub fn compare_exchange(&self, new_value: bool, comparand: bool) -> bool {
        let observed = match self.inner.compare_exchange(
            encode(comparand),
            encode(new_value),
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(previous) => previous,
            Err(actual) => actual,
        };
        Self::decode(observed)
    }

    /// Compares and sets the value atomically.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` with the value found instead.
    #[inline]
    pub fn compare_set(&self, comparand: bool, new_value: bool) -> std::result::Result<(), bool> {
        let previous = self.compare_exchange(new_value, comparand);
        if previous == comparand {
            Ok(())
        } else {
            Err(previous)
        }
    }

    /// Unconditionally replaces the value, returning the previous one.
    #[inline]
    pub fn exchange(&self, new_value: bool) -> bool {
        Self::decode(self.inner.swap(encode(new_value), Ordering::SeqCst))
    }

    /// Gets a reference to the underlying encoded slot.
    ///
    /// # Warning
    ///
    /// Storing anything other than `0` or `1` makes every later read of
    /// this boolean panic.
    #[inline]
    pub fn inner(&self) -> &StdAtomicI32 {
        &*self.inner
    }
}

impl<P: Padding> FencedAtomic for FencedBool<P> {
    type Value = bool;

    #[inline]
    fn read_unfenced(&self) -> bool {
        self.read_unfenced()
    }

    #[inline]
    fn read_acquire_fence(&self) -> bool {
        self.read_acquire_fence()
    }

    #[inline]
    fn read_full_fence(&self) -> bool {
        self.read_full_fence()
    }

    #[inline]
    fn read_compiler_only_fence(&self) -> bool {
        self.read_compiler_only_fence()
    }

    #[inline]
    fn write_unfenced(&self, value: bool) {
        self.write_unfenced(value);
    }

    #[inline]
    fn write_release_fence(&self, value: bool) {
        self.write_release_fence(value);
    }

    #[inline]
    fn write_full_fence(&self, value: bool) {
        self.write_full_fence(value);
    }

    #[inline]
    fn write_compiler_only_fence(&self, value: bool) {
        self.write_compiler_only_fence(value);
    }

    #[inline]
    fn compare_exchange(&self, new_value: bool, comparand: bool) -> bool {
        self.compare_exchange(new_value, comparand)
    }

    #[inline]
    fn exchange(&self, new_value: bool) -> bool {
        self.exchange(new_value)
    }
}

impl<P: Padding> Default for FencedBool<P> {
    #[inline]
    fn default() -> Self {
        Self::new(false)
    }
}

impl<P: Padding> From<bool> for FencedBool<P> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl<P: Padding> PartialEq for FencedBool<P> {
    fn eq(&self, other: &Self) -> bool {
        self.read_full_fence() == other.read_full_fence()
    }
}

impl<P: Padding> Eq for FencedBool<P> {}

impl<P: Padding> fmt::Debug for FencedBool<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicBool")
            .field("value", &self.read_full_fence())
            .finish()
    }
}

impl<P: Padding> fmt::Display for FencedBool<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.read_full_fence())
    }
}
