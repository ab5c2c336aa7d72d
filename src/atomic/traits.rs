/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for the fenced atomic types, providing a unified
//! interface over every padding policy.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all fenced atomic types.
///
/// Every read and write names the fence level it runs under. Callers
/// choosing a weaker level accept the weaker cross-thread visibility that
/// comes with it.
///
/// # Author
///
/// Haixing Hu
pub trait FencedAtomic {
    /// The value type stored in the atomic.
    type Value: Copy;

    /// Reads the value with no ordering guarantee.
    ///
    /// May observe a stale value under concurrent writes.
    fn read_unfenced(&self) -> Self::Value;

    /// Reads the value; no later memory operation moves before this read.
    ///
    /// Observes every write that happened before a release-fenced write
    /// read by this load.
    fn read_acquire_fence(&self) -> Self::Value;

    /// Reads the value between full fences.
    fn read_full_fence(&self) -> Self::Value;

    /// Reads the value, preventing compiler reordering only.
    fn read_compiler_only_fence(&self) -> Self::Value;

    /// Writes the value with no ordering guarantee.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    fn write_unfenced(&self, value: Self::Value);

    /// Writes the value; no earlier memory operation moves after this write.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    fn write_release_fence(&self, value: Self::Value);

    /// Writes the value between full fences.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    fn write_full_fence(&self, value: Self::Value);

    /// Writes the value, preventing compiler reordering only.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    fn write_compiler_only_fence(&self, value: Self::Value);

    /// Replaces the value with `new_value` iff it currently equals
    /// `comparand`.
    ///
    /// This is the primitive every compound operation is built from.
    ///
    /// # Parameters
    ///
    /// * `new_value` - The value to store on success.
    /// * `comparand` - The value expected to be current.
    ///
    /// # Returns
    ///
    /// The value observed immediately before the attempt. The swap took
    /// place iff it equals `comparand`.
    fn compare_exchange(&self, new_value: Self::Value, comparand: Self::Value) -> Self::Value;

    /// Unconditionally replaces the value.
    ///
    /// # Parameters
    ///
    /// * `new_value` - The value to store.
    ///
    /// # Returns
    ///
    /// The previous value.
    fn exchange(&self, new_value: Self::Value) -> Self::Value;
}

/// Trait for fenced atomic integers.
///
/// The fetch-and-modify operations run with full-fence semantics and wrap
/// on overflow. Operations without a native instruction (modulo, multiply,
/// functional updates) run an optimistic compare-exchange loop that retries
/// until it wins; contention never makes them fail.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicInteger: FencedAtomic {
    /// Adds `delta`, returning the new value.
    fn add_and_get(&self, delta: Self::Value) -> Self::Value;

    /// Adds `delta`, returning the old value.
    fn get_and_add(&self, delta: Self::Value) -> Self::Value;

    /// Increments by one, returning the new value.
    fn increment_and_get(&self) -> Self::Value;

    /// Increments by one, returning the old value.
    fn get_and_increment(&self) -> Self::Value;

    /// Decrements by one, returning the new value.
    fn decrement_and_get(&self) -> Self::Value;

    /// Decrements by one, returning the old value.
    fn get_and_decrement(&self) -> Self::Value;

    /// Replaces the value with its remainder by `divisor`.
    ///
    /// # Returns
    ///
    /// `(new, original)` where `original` is the value the swap succeeded
    /// on.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn modulo_and_get(&self, divisor: Self::Value) -> (Self::Value, Self::Value);

    /// Multiplies the value by `factor`.
    ///
    /// # Returns
    ///
    /// `(new, original)` where `original` is the value the swap succeeded
    /// on.
    fn multiply_and_get(&self, factor: Self::Value) -> (Self::Value, Self::Value);

    /// Applies `f` to the value, returning the new value.
    ///
    /// `f` may run several times under contention and must be pure.
    fn update_and_get<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;

    /// Applies `f` to the value, returning the old value.
    ///
    /// `f` may run several times under contention and must be pure.
    fn get_and_update<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;
}
