/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-concurrent
//!
//! Fence-ordered atomic values and a lock-free multi-producer circular
//! buffer built on top of them.
//!
//! Unlike the standard library atomics, every read and write of these types
//! names the memory fence it runs under (`read_acquire_fence`,
//! `write_release_fence`, `read_full_fence`, ...), so the ordering contract
//! of each access is visible at the call site.
//!
//! ## Design Goals
//!
//! - **Explicit ordering**: unfenced, acquire, release, full and
//!   compiler-only accessors on every type
//! - **Lock-free compound operations**: modulo, multiply and functional
//!   updates run a compare-exchange retry loop with spin-then-yield backoff
//! - **False-sharing isolation**: every type comes in an inline and a
//!   cache-line padded layout from a single implementation
//! - **Ordered publication**: the circular buffer publishes concurrent
//!   producers' items strictly in reservation order
//!
//! ## Features
//!
//! - Integer atomic types: `AtomicI32`, `AtomicI64`
//! - Boolean atomic type: `AtomicBool`
//! - Reference atomic types: `AtomicRef<'a, T>`, `AtomicRefArray<'a, T>`
//! - Padded counterparts: `PaddedAtomicI32`, `PaddedAtomicI64`,
//!   `PaddedAtomicBool`, `PaddedAtomicRef`, `PaddedAtomicRefArray`
//! - Lock-free buffer: `CircularBuffer<T>`
//!
//! ## Example
//!
//! ```rust
//! use prism3_concurrent::{AtomicI32, CircularBuffer};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = AtomicI32::new(12);
//! assert_eq!(counter.modulo_and_get(5), (2, 12));
//!
//! let buffer = Arc::new(CircularBuffer::new(8).unwrap());
//! let mut handles = vec![];
//!
//! for i in 0..4 {
//!     let buffer = buffer.clone();
//!     handles.push(thread::spawn(move || buffer.enqueue(i)));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(buffer.write_index(), 3);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod buffer;
pub mod error;
pub mod util;

// Re-export all public types and traits
pub use atomic::{
    AtomicBool,
    AtomicI32,
    AtomicI64,
    AtomicInteger,
    AtomicRef,
    AtomicRefArray,
    CacheLinePadded,
    FencedAtomic,
    PaddedAtomicBool,
    PaddedAtomicI32,
    PaddedAtomicI64,
    PaddedAtomicRef,
    PaddedAtomicRefArray,
    Padding,
    Unpadded,
};
pub use buffer::{
    CircularBuffer,
    SlotReservation,
};
pub use error::{
    ConcurrentError,
    Result,
};
