/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Buffers
//!
//! Lock-free buffers composed from the fenced atomic types.
//!
//! # Author
//!
//! Haixing Hu

mod circular_buffer;

pub use circular_buffer::{
    CircularBuffer,
    SlotReservation,
};
