/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Macro
//!
//! Provides a macro to generate fenced atomic integer types with consistent
//! implementations.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate fenced atomic integer types.
///
/// This macro generates a complete atomic integer type, generic over a
/// [`Padding`](crate::atomic::Padding) policy, with all methods, trait
/// implementations, and documentation.
///
/// # Parameters
///
/// * `$name` - The name of the generic atomic type (e.g., `FencedI32`)
/// * `$alias` - The unpadded alias (e.g., `AtomicI32`)
/// * `$inner_type` - The underlying std atomic type (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
macro_rules! impl_atomic_integer {
    ($name:ident, $alias:ident, $inner_type:ty, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Fenced atomic ", $doc_type, ".")]
        ///
        /// Every read and write names the memory fence it runs under, so
        /// the caller picks the ordering strength per access instead of
        /// relying on a hidden default.
        ///
        /// # Fence Levels
        ///
        /// - **Unfenced**: `Relaxed` access, may observe stale values.
        /// - **Acquire / Release**: one-directional barriers pairing a
        ///   publishing write with an observing read.
        /// - **Full**: the access sits between two `SeqCst` fences.
        /// - **Compiler-only**: the compiler keeps program order, the CPU
        ///   is free to reorder.
        ///
        /// Fetch-and-modify operations (`add_and_get`, `increment_and_get`,
        /// ...) run with full-fence semantics. Modulo, multiply and
        /// functional updates run an optimistic compare-exchange loop with
        /// spin-then-yield backoff.
        ///
        /// # Padding
        ///
        /// The `P` parameter selects the layout of the guarded value.
        #[doc = concat!("Use [`", stringify!($alias), "`] for the inline layout and `Padded", stringify!($alias), "` to isolate the value on its own cache line.")]
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_concurrent::", stringify!($alias), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counter = Arc::new(", stringify!($alias), "::new(0));")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let counter = counter.clone();
        ///     handles.push(thread::spawn(move || {
        ///         for _ in 0..100 {
        ///             counter.increment_and_get();
        ///         }
        ///     }));
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counter.read_full_fence(), 1000);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        pub struct $name<P: Padding = Unpadded> {
            inner: P::Cell<$inner_type>,
        }

        impl<P: Padding> $name<P> {
            /// Creates a new atomic integer.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_concurrent::", stringify!($alias), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($alias), "::new(42);")]
            /// assert_eq!(atomic.read_acquire_fence(), 42);
            /// ```
            #[inline]
            pub fn new(value: $value_type) -> Self {
                Self {
                    inner: P::wrap(<$inner_type>::new(value)),
                }
            }

            /// Reads the value with a `Relaxed` load.
            ///
            /// No ordering guarantee relative to other memory operations;
            /// may observe a stale value under concurrent writes.
            ///
            /// # Returns
            ///
            /// The current value.
            #[inline]
            pub fn read_unfenced(&self) -> $value_type {
                self.inner.load(Ordering::Relaxed)
            }

            /// Reads the value with an `Acquire` load.
            ///
            /// No subsequent memory operation of this thread is reordered
            /// before the load. If the value was written by a release-fenced
            /// write, every write that preceded it is visible afterwards.
            ///
            /// # Returns
            ///
            /// The current value.
            #[inline]
            pub fn read_acquire_fence(&self) -> $value_type {
                self.inner.load(Ordering::Acquire)
            }

            /// Reads the value between two full fences.
            ///
            /// The strongest read: no memory operation moves across it in
            /// either direction. Comparison and formatting use this read.
            ///
            /// # Returns
            ///
            /// The current value.
            #[inline]
            pub fn read_full_fence(&self) -> $value_type {
                fence::full(|order| self.inner.load(order))
            }

            /// Reads the value between two compiler-only fences.
            ///
            /// The compiler keeps the load in program order but no CPU
            /// barrier is issued.
            ///
            /// # Returns
            ///
            /// The current value.
            #[inline]
            pub fn read_compiler_only_fence(&self) -> $value_type {
                fence::compiler_only(|order| self.inner.load(order))
            }

            /// Writes the value with a `Relaxed` store.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value.
            #[inline]
            pub fn write_unfenced(&self, value: $value_type) {
                self.inner.store(value, Ordering::Relaxed);
            }

            /// Writes the value with a `Release` store.
            ///
            /// No earlier memory operation of this thread is reordered after
            /// the store, so an acquire-fenced reader that observes `value`
            /// also observes everything written before it.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_concurrent::", stringify!($alias), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($alias), "::new(0);")]
            /// atomic.write_release_fence(7);
            /// assert_eq!(atomic.read_acquire_fence(), 7);
            /// ```
            #[inline]
            pub fn write_release_fence(&self, value: $value_type) {
                self.inner.store(value, Ordering::Release);
            }

            /// Writes the value between two full fences.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value.
            #[inline]
            pub fn write_full_fence(&self, value: $value_type) {
                fence::full(|order| self.inner.store(value, order));
            }

            /// Writes the value between two compiler-only fences.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value.
            #[inline]
            pub fn write_compiler_only_fence(&self, value: $value_type) {
                fence::compiler_only(|order| self.inner.store(value, order));
            }

            /// Replaces the value with `new_value` iff it currently equals
            /// `comparand`.
            ///
            /// Uses `SeqCst` ordering on both success and failure.
            ///
            /// # Parameters
            ///
            /// * `new_value` - The value to store on success.
            /// * `comparand` - The value expected to be current.
            ///
            /// # Returns
            ///
            /// The value observed immediately before the attempt. The swap
            /// took place iff it equals `comparand`.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_concurrent::", stringify!($alias), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($alias), "::new(1);")]
            /// assert_eq!(atomic.compare_exchange(0, 0), 1);
            /// assert_eq!(atomic.read_full_fence(), 1);
            ///
            /// assert_eq!(atomic.compare_exchange(0, 1), 1);
            /// assert_eq!(atomic.read_full_fence(), 0);
            /// ```
            #[inline]
            pub fn compare_exchange(
                &self,
                new_value: $value_type,
                comparand: $value_type,
            ) -> $value_type {
                match self.inner.compare_exchange(
                    comparand,
                    new_value,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(previous) => previous,
                    Err(actual) => actual,
                }
            }

            /// Compares and sets the value atomically.
            ///
            /// The `Result` form of [`compare_exchange`](Self::compare_exchange),
            /// convenient when only success matters.
            ///
            /// # Parameters
            ///
            /// * `comparand` - The value expected to be current.
            /// * `new_value` - The value to store on success.
            ///
            /// # Returns
            ///
            /// `Ok(())` on success, or `Err(actual)` with the value that was
            /// found instead.
            #[inline]
            pub fn compare_set(
                &self,
                comparand: $value_type,
                new_value: $value_type,
            ) -> Result<(), $value_type> {
                let previous = self.compare_exchange(new_value, comparand);
                if previous == comparand {
                    Ok(())
                } else {
                    Err(previous)
                }
            }

            /// Unconditionally replaces the value.
            ///
            /// # Parameters
            ///
            /// * `new_value` - The value to store.
            ///
            /// # Returns
            ///
            /// The previous value.
            #[inline]
            pub fn exchange(&self, new_value: $value_type) -> $value_type {
                self.inner.swap(new_value, Ordering::SeqCst)
            }

            /// Adds `delta`, returning the new value.
            ///
            /// Full-fence fetch-and-add; wraps on overflow.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add.
            ///
            /// # Returns
            ///
            /// The value after adding.
            #[inline]
            pub fn add_and_get(&self, delta: $value_type) -> $value_type {
                self.get_and_add(delta).wrapping_add(delta)
            }

            /// Adds `delta`, returning the old value.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add.
            ///
            /// # Returns
            ///
            /// The value before adding.
            #[inline]
            pub fn get_and_add(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_add(delta, Ordering::SeqCst)
            }

            /// Increments by one, returning the new value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_concurrent::", stringify!($alias), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($alias), "::new(10);")]
            /// assert_eq!(atomic.increment_and_get(), 11);
            /// ```
            #[inline]
            pub fn increment_and_get(&self) -> $value_type {
                self.add_and_get(1)
            }

            /// Increments by one, returning the old value.
            #[inline]
            pub fn get_and_increment(&self) -> $value_type {
                self.get_and_add(1)
            }

            /// Decrements by one, returning the new value.
            #[inline]
            pub fn decrement_and_get(&self) -> $value_type {
                self.get_and_decrement().wrapping_sub(1)
            }

            /// Decrements by one, returning the old value.
            #[inline]
            pub fn get_and_decrement(&self) -> $value_type {
                self.inner.fetch_sub(1, Ordering::SeqCst)
            }

            /// Replaces the value with its remainder by `divisor`.
            ///
            /// There is no native atomic remainder, so this snapshots the
            /// value under an acquire fence, computes the remainder and
            /// attempts a compare-exchange, backing off and retrying until
            /// no other thread races ahead.
            ///
            /// # Parameters
            ///
            /// * `divisor` - The divisor.
            ///
            /// # Returns
            ///
            /// `(new, original)` where `original` is the value the swap
            /// succeeded on.
            ///
            /// # Panics
            ///
            /// Panics if `divisor` is zero, like the `%` operator.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_concurrent::", stringify!($alias), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($alias), "::new(12);")]
            /// assert_eq!(atomic.modulo_and_get(5), (2, 12));
            /// assert_eq!(atomic.read_full_fence(), 2);
            /// ```
            #[inline]
            pub fn modulo_and_get(&self, divisor: $value_type) -> ($value_type, $value_type) {
                assert!(divisor != 0, "attempt to calculate the remainder with a divisor of zero");
                self.update(|current| current.wrapping_rem(divisor))
            }

            /// Multiplies the value by `factor`.
            ///
            /// Runs the same retry loop as
            /// [`modulo_and_get`](Self::modulo_and_get); wraps on overflow.
            ///
            /// # Parameters
            ///
            /// * `factor` - The factor to multiply by.
            ///
            /// # Returns
            ///
            /// `(new, original)` where `original` is the value the swap
            /// succeeded on.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_concurrent::", stringify!($alias), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($alias), "::new(2);")]
            /// assert_eq!(atomic.multiply_and_get(3), (6, 2));
            /// ```
            #[inline]
            pub fn multiply_and_get(&self, factor: $value_type) -> ($value_type, $value_type) {
                self.update(|current| current.wrapping_mul(factor))
            }

            /// Applies `f` to the value, returning the new value.
            ///
            /// `f` may run several times under contention and must be pure.
            ///
            /// # Parameters
            ///
            /// * `f` - Computes the new value from the current one.
            ///
            /// # Returns
            ///
            /// The value after the update.
            #[inline]
            pub fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.update(f).0
            }

            /// Applies `f` to the value, returning the old value.
            ///
            /// `f` may run several times under contention and must be pure.
            ///
            /// # Parameters
            ///
            /// * `f` - Computes the new value from the current one.
            ///
            /// # Returns
            ///
            /// The value the update was applied to.
            #[inline]
            pub fn get_and_update<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.update(f).1
            }

            #[inline]
            fn update<F>(&self, f: F) -> ($value_type, $value_type)
            where
                F: Fn($value_type) -> $value_type,
            {
                fence::retry_update(
                    || self.read_acquire_fence(),
                    |new_value, comparand| self.compare_exchange(new_value, comparand),
                    f,
                )
            }

            /// Gets a reference to the underlying standard library atomic
            /// type.
            ///
            /// Gives full control over memory ordering for cases the fence
            /// levels do not cover.
            #[inline]
            pub fn inner(&self) -> &$inner_type {
                &*self.inner
            }
        }

        // Trait implementations forward to the inherent methods so both
        // direct calls and generic code over `FencedAtomic` work.

        impl<P: Padding> crate::atomic::traits::FencedAtomic for $name<P> {
            type Value = $value_type;

            #[inline]
            fn read_unfenced(&self) -> $value_type {
                self.read_unfenced()
            }

            #[inline]
            fn read_acquire_fence(&self) -> $value_type {
                self.read_acquire_fence()
            }

            #[inline]
            fn read_full_fence(&self) -> $value_type {
                self.read_full_fence()
            }

            #[inline]
            fn read_compiler_only_fence(&self) -> $value_type {
                self.read_compiler_only_fence()
            }

            #[inline]
            fn write_unfenced(&self, value: $value_type) {
                self.write_unfenced(value);
            }

            #[inline]
            fn write_release_fence(&self, value: $value_type) {
                self.write_release_fence(value);
            }

            #[inline]
            fn write_full_fence(&self, value: $value_type) {
                self.write_full_fence(value);
            }

            #[inline]
            fn write_compiler_only_fence(&self, value: $value_type) {
                self.write_compiler_only_fence(value);
            }

            #[inline]
            fn compare_exchange(&self, new_value: $value_type, comparand: $value_type) -> $value_type {
                self.compare_exchange(new_value, comparand)
            }

            #[inline]
            fn exchange(&self, new_value: $value_type) -> $value_type {
                self.exchange(new_value)
            }
        }

        impl<P: Padding> crate::atomic::traits::AtomicInteger for $name<P> {
            #[inline]
            fn add_and_get(&self, delta: $value_type) -> $value_type {
                self.add_and_get(delta)
            }

            #[inline]
            fn get_and_add(&self, delta: $value_type) -> $value_type {
                self.get_and_add(delta)
            }

            #[inline]
            fn increment_and_get(&self) -> $value_type {
                self.increment_and_get()
            }

            #[inline]
            fn get_and_increment(&self) -> $value_type {
                self.get_and_increment()
            }

            #[inline]
            fn decrement_and_get(&self) -> $value_type {
                self.decrement_and_get()
            }

            #[inline]
            fn get_and_decrement(&self) -> $value_type {
                self.get_and_decrement()
            }

            #[inline]
            fn modulo_and_get(&self, divisor: $value_type) -> ($value_type, $value_type) {
                self.modulo_and_get(divisor)
            }

            #[inline]
            fn multiply_and_get(&self, factor: $value_type) -> ($value_type, $value_type) {
                self.multiply_and_get(factor)
            }

            #[inline]
            fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.update_and_get(f)
            }

            #[inline]
            fn get_and_update<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.get_and_update(f)
            }
        }

        impl<P: Padding> Default for $name<P> {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl<P: Padding> From<$value_type> for $name<P> {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl<P: Padding> PartialEq for $name<P> {
            fn eq(&self, other: &Self) -> bool {
                self.read_full_fence() == other.read_full_fence()
            }
        }

        impl<P: Padding> Eq for $name<P> {}

        impl<P: Padding> PartialOrd for $name<P> {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<P: Padding> Ord for $name<P> {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.read_full_fence().cmp(&other.read_full_fence())
            }
        }

        impl<P: Padding> fmt::Debug for $name<P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($alias))
                    .field("value", &self.read_full_fence())
                    .finish()
            }
        }

        impl<P: Padding> fmt::Display for $name<P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.read_full_fence())
            }
        }
    };
}

pub(crate) use impl_atomic_integer;
