/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Boolean Flag Example
//!
//! Demonstrates using fenced atomic booleans for thread synchronization.

use prism3_concurrent::{
    AtomicBool,
    AtomicI32,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    println!("=== Atomic Boolean Flag Example ===\n");

    // Example 1: Simple flag
    println!("1. Simple Flag:");
    let flag = AtomicBool::new(false);
    println!("   Initial value: {}", flag.read_full_fence());

    flag.write_full_fence(true);
    println!("   After write(true): {}", flag.read_full_fence());

    let previous = flag.exchange(false);
    println!("   Exchanged out {}, now {}", previous, flag);

    // Example 2: One-time initialization
    println!("\n2. One-time Initialization:");
    let initialized = Arc::new(AtomicBool::new(false));
    let mut handles = vec![];

    for i in 0..5 {
        let initialized = initialized.clone();
        let handle = thread::spawn(move || {
            if initialized.compare_set(false, true).is_ok() {
                println!("   Thread {} performed initialization", i);
                thread::sleep(Duration::from_millis(100));
            } else {
                println!("   Thread {} skipped (already initialized)", i);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("   Final state: initialized = {}", initialized.read_full_fence());

    // Example 3: Producer-Consumer signaling
    println!("\n3. Producer-Consumer Signaling:");
    let ready = Arc::new(AtomicBool::new(false));
    let data = Arc::new(AtomicI32::new(0));

    let ready_clone = ready.clone();
    let data_clone = data.clone();

    // Producer thread
    let producer = thread::spawn(move || {
        println!("   Producer: preparing data...");
        thread::sleep(Duration::from_millis(100));
        data_clone.write_unfenced(42);
        ready_clone.write_release_fence(true);
        println!("   Producer: data ready!");
    });

    // Consumer thread
    let consumer = thread::spawn(move || {
        println!("   Consumer: waiting for data...");
        while !ready.read_acquire_fence() {
            thread::yield_now();
        }
        println!("   Consumer: received data = {}", data.read_unfenced());
    });

    producer.join().unwrap();
    consumer.join().unwrap();
}
