/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Circular Buffer
//!
//! A fixed-capacity ring that lets any number of producers enqueue without
//! locks, publishing their items strictly in reservation order.
//!
//! Each enqueue runs in two phases:
//!
//! 1. **Stage**: take the next ticket from `available_slot_index`. Tickets
//!    grow without bound; a ticket's physical slot is `ticket mod capacity`.
//! 2. **Commit**: wait until `write_index` shows that the previous ticket
//!    has been published, write the item into the slot, then advance
//!    `write_index` to this ticket.
//!
//! Every logical slot moves `Free -> Reserved -> Committed` and never goes
//! back. The buffer defines no consumer: `head_index` is kept for an
//! external reader and nothing here advances it.
//!
//! # Author
//!
//! Haixing Hu

use std::cell::UnsafeCell;
use std::fmt;
use std::ptr;

use crossbeam_utils::Backoff;

use crate::atomic::PaddedAtomicI64;
use crate::error::{
    ConcurrentError,
    Result,
};
use crate::util::next_power_of_two;

/// Lock-free multi-producer circular buffer.
///
/// Producers call [`enqueue`](Self::enqueue), or the two phases
/// [`stage_slot`](Self::stage_slot) and [`commit_slot`](Self::commit_slot)
/// separately. Commits become visible through
/// [`write_index`](Self::write_index) in ticket order, whatever order the
/// producers finish in.
///
/// Waiting is spin-then-yield, never an OS lock. A producer whose
/// predecessor never commits waits forever.
///
/// # Example
///
/// ```rust
/// use prism3_concurrent::CircularBuffer;
/// use std::sync::Arc;
/// use std::thread;
///
/// let buffer = Arc::new(CircularBuffer::new(70).unwrap());
/// assert_eq!(buffer.capacity(), 128);
///
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let buffer = buffer.clone();
///         thread::spawn(move || buffer.enqueue(i))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(buffer.write_index(), 3);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct CircularBuffer<T> {
    storage: Box<[UnsafeCell<Option<T>>]>,
    mask: i64,
    available_slot_index: PaddedAtomicI64,
    write_index: PaddedAtomicI64,
    head_index: PaddedAtomicI64,
}

// SAFETY: items only move into the storage through `commit_slot`, which
// gives one producer exclusive access to a slot at a time. Shared
// references never read the storage.
unsafe impl<T: Send> Sync for CircularBuffer<T> {}

/// A ticket taken by [`CircularBuffer::stage_slot`].
///
/// The reservation is bound to the buffer that issued it and is consumed by
/// [`CircularBuffer::commit_slot`]. Dropping it without committing stalls
/// every later producer.
#[must_use = "later producers wait until this reservation is committed"]
pub struct SlotReservation<'b, T> {
    buffer: &'b CircularBuffer<T>,
    ticket: i64,
}

impl<'b, T> SlotReservation<'b, T> {
    /// Returns the logical index handed out by the buffer.
    #[inline]
    pub fn ticket(&self) -> i64 {
        self.ticket
    }

    /// Returns the physical slot this reservation writes to.
    #[inline]
    pub fn slot(&self) -> usize {
        self.buffer.slot_of(self.ticket)
    }
}

impl<'b, T> fmt::Debug for SlotReservation<'b, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotReservation")
            .field("ticket", &self.ticket)
            .finish()
    }
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer holding at least `capacity` items.
    ///
    /// The capacity is rounded up to the next power of two so the physical
    /// slot of a ticket is a mask instead of a division.
    ///
    /// # Parameters
    ///
    /// * `capacity` - The requested capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConcurrentError::CapacityOutOfRange`] if `capacity < 1` or
    /// the rounded capacity cannot be allocated on this platform, and
    /// [`ConcurrentError::PowerOfTwoOverflow`] if it cannot be rounded.
    pub fn new(capacity: i64) -> Result<Self> {
        if capacity < 1 {
            return Err(ConcurrentError::CapacityOutOfRange(capacity));
        }
        let effective = next_power_of_two(capacity)?;
        let len = usize::try_from(effective)
            .map_err(|_| ConcurrentError::CapacityOutOfRange(capacity))?;
        let storage = (0..len).map(|_| UnsafeCell::new(None)).collect();
        tracing::debug!(
            requested = capacity,
            capacity = effective,
            "circular buffer created"
        );
        Ok(Self {
            storage,
            mask: effective - 1,
            available_slot_index: PaddedAtomicI64::new(0),
            write_index: PaddedAtomicI64::new(-1),
            head_index: PaddedAtomicI64::new(0),
        })
    }

    /// Returns the effective capacity, a power of two.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the physical slot of `ticket`.
    #[inline]
    pub fn slot_of(&self, ticket: i64) -> usize {
        (ticket & self.mask) as usize
    }

    /// Returns the next ticket to be handed out.
    #[inline]
    pub fn available_slot_index(&self) -> i64 {
        self.available_slot_index.read_full_fence()
    }

    /// Returns the highest ticket whose commit has completed, or `-1`
    /// before the first commit.
    ///
    /// Successive reads never go backwards. The value is a ticket, not a
    /// slot: after `K` enqueues it is `K - 1` even once tickets have
    /// wrapped around the ring. Use [`write_slot`](Self::write_slot) for
    /// the physical position.
    #[inline]
    pub fn write_index(&self) -> i64 {
        self.write_index.read_full_fence()
    }

    /// Returns the physical slot of the last published ticket, i.e.
    /// `write_index mod capacity`, or `None` before the first commit.
    #[inline]
    pub fn write_slot(&self) -> Option<usize> {
        match self.write_index() {
            -1 => None,
            ticket => Some(self.slot_of(ticket)),
        }
    }

    /// Returns the consumer cursor.
    ///
    /// No operation of this buffer advances it.
    #[inline]
    pub fn head_index(&self) -> i64 {
        self.head_index.read_full_fence()
    }

    /// Reserves the next logical slot.
    ///
    /// Concurrent callers never receive the same ticket; tickets are handed
    /// out as a gap-free increasing sequence starting at zero.
    ///
    /// # Returns
    ///
    /// The reservation to pass to [`commit_slot`](Self::commit_slot).
    pub fn stage_slot(&self) -> SlotReservation<'_, T> {
        let ticket = self.available_slot_index.get_and_increment();
        tracing::trace!(ticket, slot = self.slot_of(ticket), "slot reserved");
        SlotReservation {
            buffer: self,
            ticket,
        }
    }

    /// Writes `item` into a reserved slot and publishes it.
    ///
    /// Spins with escalating backoff until the producer holding the
    /// previous ticket has published, so commits become visible in
    /// reservation order.
    ///
    /// # Parameters
    ///
    /// * `reservation` - A reservation issued by this buffer.
    /// * `item` - The item to store. It replaces whatever the slot held
    ///   one lap earlier.
    ///
    /// # Panics
    ///
    /// Panics if `reservation` was issued by another buffer.
    pub fn commit_slot(&self, reservation: SlotReservation<'_, T>, item: T) {
        assert!(
            ptr::eq(reservation.buffer, self),
            "reservation was issued by a different buffer"
        );
        let ticket = reservation.ticket;
        let previous = ticket - 1;

        // A compare-exchange that stores the value it expects only
        // succeeds once the predecessor has published.
        let backoff = Backoff::new();
        while self.write_index.compare_exchange(previous, previous) != previous {
            backoff.snooze();
        }

        let slot = &self.storage[self.slot_of(ticket)];
        // SAFETY: every ticket below `ticket` has published, so no earlier
        // producer still touches this slot, and no later producer passes
        // the gate above until this one publishes. Tickets are unique and
        // reservations are consumed, so no other thread holds this ticket.
        unsafe {
            *slot.get() = Some(item);
        }

        let published = self.write_index.compare_exchange(ticket, previous);
        debug_assert_eq!(published, previous, "write index moved under a gated commit");
        tracing::trace!(ticket, "slot committed");
    }

    /// Stages and commits `item`.
    ///
    /// # Returns
    ///
    /// The ticket the item was published under.
    pub fn enqueue(&self, item: T) -> i64 {
        let reservation = self.stage_slot();
        let ticket = reservation.ticket();
        self.commit_slot(reservation, item);
        ticket
    }

    /// Returns the item stored in physical slot `slot`, if any.
    ///
    /// Requires exclusive access, so no producer can be running.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.storage.get_mut(slot)?.get_mut().as_mut()
    }

    /// Consumes the buffer, returning the slot contents in physical order.
    pub fn into_vec(self) -> Vec<Option<T>> {
        self.storage
            .into_vec()
            .into_iter()
            .map(UnsafeCell::into_inner)
            .collect()
    }
}

impl<T> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularBuffer")
            .field("capacity", &self.capacity())
            .field("available_slot_index", &self.available_slot_index())
            .field("write_index", &self.write_index())
            .field("head_index", &self.head_index())
            .finish()
    }
}
