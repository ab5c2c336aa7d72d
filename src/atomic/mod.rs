/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Atomic values whose every read and write names the memory fence it runs
//! under: unfenced, acquire, release, full or compiler-only.
//!
//! # Features
//!
//! - Scalar integers (`i32`, `i64`) with fetch-and-modify operations and
//!   compare-exchange retry loops for modulo, multiply and functional
//!   updates
//! - A boolean stored in a strictly 0/1 encoded integer slot
//! - Optional shared references, singly and as a fixed-length array with
//!   snapshot iteration
//! - Every type in an inline and a cache-line padded layout, selected by a
//!   [`Padding`] policy
//!
//! # Author
//!
//! Haixing Hu

mod atomic_bool;
mod atomic_i32;
mod atomic_i64;
mod atomic_integer_macro;
mod atomic_ref;
mod atomic_ref_array;
mod fence;
pub mod padding;
mod traits;

pub use atomic_bool::{
    decode_bool,
    AtomicBool,
    FencedBool,
    PaddedAtomicBool,
};
pub use atomic_i32::{
    AtomicI32,
    FencedI32,
    PaddedAtomicI32,
};
pub use atomic_i64::{
    AtomicI64,
    FencedI64,
    PaddedAtomicI64,
};
pub use atomic_ref::{
    AtomicRef,
    FencedRef,
    PaddedAtomicRef,
};
pub use atomic_ref_array::{
    AtomicRefArray,
    FencedRefArray,
    PaddedAtomicRefArray,
    Snapshot,
};
pub use padding::{
    CacheLinePadded,
    Padding,
    Unpadded,
    CACHE_LINE_SIZE,
};
pub use traits::{
    AtomicInteger,
    FencedAtomic,
};
