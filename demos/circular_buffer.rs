/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Circular Buffer Example
//!
//! Demonstrates several producers enqueuing into a lock-free circular
//! buffer. Run with `RUST_LOG=trace` to see reservations and commits.

use prism3_concurrent::CircularBuffer;
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    println!("=== Circular Buffer Example ===\n");

    let buffer = match CircularBuffer::new(12) {
        Ok(buffer) => Arc::new(buffer),
        Err(err) => {
            eprintln!("failed to create buffer: {}", err);
            return;
        }
    };
    println!("Requested 12 slots, got {}", buffer.capacity());

    // Example 1: Concurrent producers
    println!("\n1. Concurrent Producers:");
    let mut handles = vec![];
    for producer in 0..4 {
        let buffer = buffer.clone();
        let handle = thread::spawn(move || {
            for i in 0..3 {
                let ticket = buffer.enqueue(format!("p{}-{}", producer, i));
                println!("   Producer {} published ticket {}", producer, ticket);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
    println!("   write_index = {}", buffer.write_index());

    // Example 2: Staging and committing separately
    println!("\n2. Stage Then Commit:");
    let reservation = buffer.stage_slot();
    println!(
        "   Reserved ticket {} in slot {}; write_index still {}",
        reservation.ticket(),
        reservation.slot(),
        buffer.write_index()
    );
    buffer.commit_slot(reservation, "late".to_string());
    println!("   After commit: write_index = {}", buffer.write_index());

    // Example 3: Reading back once producers are done
    println!("\n3. Contents:");
    if let Ok(buffer) = Arc::try_unwrap(buffer) {
        for (slot, item) in buffer.into_vec().into_iter().enumerate() {
            println!("   slot {:2}: {:?}", slot, item);
        }
    }
}
