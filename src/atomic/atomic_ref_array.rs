/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Fenced Atomic Reference Array
//!
//! A fixed-length array of independent atomic reference slots, plus a
//! snapshot iterator that never observes writes made after it was taken.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::AtomicPtr;
use std::sync::atomic::Ordering;
use std::vec;

use crate::atomic::atomic_ref::{
    decode,
    encode,
    InvariantBorrow,
};
use crate::atomic::fence;
use crate::atomic::padding::{
    CacheLinePadded,
    Padding,
    Unpadded,
};
use crate::error::{
    ConcurrentError,
    Result,
};

/// Fixed-length array of fenced atomic references.
///
/// Each slot satisfies the [`FencedRef`](crate::atomic::FencedRef)
/// contract on its own. The length never changes after construction.
/// Indexing past the end panics, like slice indexing.
///
/// # Example
///
/// ```rust
/// use prism3_concurrent::AtomicRefArray;
///
/// let (a, b) = (1, 2);
/// let array = AtomicRefArray::from_vec(vec![Some(&a), None]).unwrap();
///
/// let snapshot = array.iter();
/// array.set(1, Some(&b));
///
/// // The snapshot was taken before the write.
/// assert_eq!(snapshot.collect::<Vec<_>>(), vec![Some(&1), None]);
/// assert_eq!(array.get(1), Some(&2));
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct FencedRefArray<'a, T, P: Padding = Unpadded> {
    slots: Box<[P::Cell<AtomicPtr<T>>]>,
    _marker: InvariantBorrow<'a, T>,
}

/// Reference array with inline slots.
pub type AtomicRefArray<'a, T> = FencedRefArray<'a, T, Unpadded>;

/// Reference array whose slots each sit on their own cache line.
pub type PaddedAtomicRefArray<'a, T> = FencedRefArray<'a, T, CacheLinePadded>;

impl<'a, T, P: Padding> FencedRefArray<'a, T, P> {
    /// Creates an array of `len` null slots.
    ///
    /// # Errors
    ///
    /// Returns [`ConcurrentError::LengthOutOfRange`] if `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        Self::from_vec(vec![None; len])
    }

    /// Creates an array holding `values`, one slot per element.
    ///
    /// # Errors
    ///
    /// Returns [`ConcurrentError::LengthOutOfRange`] if `values` is empty.
    pub fn from_vec(values: Vec<Option<&'a T>>) -> Result<Self> {
        if values.is_empty() {
            return Err(ConcurrentError::LengthOutOfRange(0));
        }
        let slots = values
            .into_iter()
            .map(|value| P::wrap(AtomicPtr::new(encode(value))))
            .collect();
        Ok(Self {
            slots,
            _marker: PhantomData,
        })
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: construction rejects empty arrays.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    fn load(&self, index: usize, order: Ordering) -> Option<&'a T> {
        // SAFETY: slots only ever hold null or pointers encoded from
        // `&'a T`, and they are not exposed for raw writes.
        unsafe { decode(self.slots[index].load(order)) }
    }

    #[inline]
    fn store(&self, index: usize, value: Option<&'a T>, order: Ordering) {
        self.slots[index].store(encode(value), order);
    }

    /// Reads slot `index` with an `Acquire` load.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.read_acquire_fence(index)
    }

    /// Writes slot `index` with a `Release` store.
    #[inline]
    pub fn set(&self, index: usize, value: Option<&'a T>) {
        self.write_release_fence(index, value);
    }

    /// Reads slot `index` with a `Relaxed` load.
    #[inline]
    pub fn read_unfenced(&self, index: usize) -> Option<&'a T> {
        self.load(index, Ordering::Relaxed)
    }

    /// Reads slot `index` with an `Acquire` load.
    #[inline]
    pub fn read_acquire_fence(&self, index: usize) -> Option<&'a T> {
        self.load(index, Ordering::Acquire)
    }

    /// Reads slot `index` between two full fences.
    #[inline]
    pub fn read_full_fence(&self, index: usize) -> Option<&'a T> {
        fence::full(|order| self.load(index, order))
    }

    /// Reads slot `index` between two compiler-only fences.
    #[inline]
    pub fn read_compiler_only_fence(&self, index: usize) -> Option<&'a T> {
        fence::compiler_only(|order| self.load(index, order))
    }

    /// Writes slot `index` with a `Relaxed` store.
    #[inline]
    pub fn write_unfenced(&self, index: usize, value: Option<&'a T>) {
        self.store(index, value, Ordering::Relaxed);
    }

    /// Writes slot `index` with a `Release` store.
    #[inline]
    pub fn write_release_fence(&self, index: usize, value: Option<&'a T>) {
        self.store(index, value, Ordering::Release);
    }

    /// Writes slot `index` between two full fences.
    #[inline]
    pub fn write_full_fence(&self, index: usize, value: Option<&'a T>) {
        fence::full(|order| self.store(index, value, order));
    }

    /// Writes slot `index` between two compiler-only fences.
    #[inline]
    pub fn write_compiler_only_fence(&self, index: usize, value: Option<&'a T>) {
        fence::compiler_only(|order| self.store(index, value, order));
    }

    /// Replaces slot `index` with `new_value` iff it currently holds
    /// `comparand` (by identity).
    ///
    /// # Returns
    ///
    /// The reference observed immediately before the attempt.
    #[inline]
    pub fn compare_exchange(
        &self,
        index: usize,
        new_value: Option<&'a T>,
        comparand: Option<&'a T>,
    ) -> Option<&'a T> {
        let observed = match self.slots[index].compare_exchange(
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

    /// Unconditionally replaces slot `index`, returning the previous
    /// reference.
    #[inline]
    pub fn exchange(&self, index: usize, new_value: Option<&'a T>) -> Option<&'a T> {
        let previous = self.slots[index].swap(encode(new_value), Ordering::SeqCst);
        // SAFETY: see `load`.
        unsafe { decode(previous) }
    }

    /// Copies every slot into a plain vector.
    ///
    /// The copy is taken after a full fence, before any element is handed
    /// out, so writes that happen while the caller consumes it are not
    /// reflected.
    pub fn snapshot(&self) -> Vec<Option<&'a T>> {
        fence::full(|_| {
            (0..self.slots.len())
                .map(|index| self.load(index, Ordering::Acquire))
                .collect()
        })
    }

    /// Returns an iterator over a snapshot of the slots.
    ///
    /// The sequence reflects a single point in time rather than a live
    /// view. It is finite and cannot be restarted; call `iter` again for a
    /// fresh snapshot.
    pub fn iter(&self) -> Snapshot<'a, T> {
        Snapshot {
            inner: self.snapshot().into_iter(),
        }
    }
}

/// Iterator over a point-in-time copy of a reference array.
///
/// Created by [`FencedRefArray::iter`].
#[derive(Debug, Clone)]
pub struct Snapshot<'a, T> {
    inner: vec::IntoIter<Option<&'a T>>,
}

impl<'a, T> Iterator for Snapshot<'a, T> {
    type Item = Option<&'a T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Snapshot<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Snapshot<'a, T> {}

impl<'s, 'a, T, P: Padding> IntoIterator for &'s FencedRefArray<'a, T, P> {
    type Item = Option<&'a T>;
    type IntoIter = Snapshot<'a, T>;

    fn into_iter(self) -> Snapshot<'a, T> {
        self.iter()
    }
}

impl<'a, T: PartialEq, P: Padding> PartialEq for FencedRefArray<'a, T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}

impl<'a, T: fmt::Debug, P: Padding> fmt::Debug for FencedRefArray<'a, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
