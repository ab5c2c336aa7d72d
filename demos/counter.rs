/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Counter Example
//!
//! Demonstrates using fenced atomic integers as thread-safe counters.

use prism3_concurrent::{
    AtomicI32,
    PaddedAtomicI64,
};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic Counter Example ===\n");

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = AtomicI32::new(0);
    println!("   Initial value: {}", counter.read_full_fence());

    counter.increment_and_get();
    println!("   After increment: {}", counter.read_full_fence());

    counter.add_and_get(5);
    println!("   After adding 5: {}", counter.read_full_fence());

    counter.decrement_and_get();
    println!("   After decrement: {}", counter.read_full_fence());

    // Example 2: Multi-threaded counter on its own cache line
    println!("\n2. Multi-threaded Counter:");
    let counter = Arc::new(PaddedAtomicI64::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                counter.increment_and_get();
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Final count: {} (expected: {})",
        counter.read_full_fence(),
        num_threads * increments_per_thread
    );

    // Example 3: Compare-exchange
    println!("\n3. Compare-Exchange:");
    let counter = AtomicI32::new(10);
    println!("   Initial value: {}", counter.read_full_fence());

    let observed = counter.compare_exchange(20, 10);
    println!("   CAS(20, expect 10) observed {}, value is now {}", observed, counter);

    let observed = counter.compare_exchange(30, 10);
    println!("   CAS(30, expect 10) observed {}, value is still {}", observed, counter);

    // Example 4: Compound updates
    println!("\n4. Compound Updates:");
    let counter = AtomicI32::new(12);
    let (value, original) = counter.modulo_and_get(5);
    println!("   12 mod 5: {} (was {})", value, original);

    let (value, original) = counter.multiply_and_get(21);
    println!("   2 * 21: {} (was {})", value, original);

    let doubled = counter.update_and_get(|x| x * 2);
    println!("   Doubled: {}", doubled);
}
