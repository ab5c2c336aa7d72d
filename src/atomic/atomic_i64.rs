/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Fenced Atomic 64-bit Signed Integer
//!
//! Provides a fenced atomic 64-bit signed integer in both the inline and
//! the cache-line padded layout.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;
use crate::atomic::fence;
use crate::atomic::padding::{
    CacheLinePadded,
    Padding,
    Unpadded,
};

impl_atomic_integer!(
    FencedI64,
    AtomicI64,
    std::sync::atomic::AtomicI64,
    i64,
    "64-bit signed integer"
);

/// Fenced atomic 64-bit signed integer stored inline.
pub type AtomicI64 = FencedI64<Unpadded>;

/// Fenced atomic 64-bit signed integer isolated on its own cache line.
pub type PaddedAtomicI64 = FencedI64<CacheLinePadded>;
