/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Reference Example
//!
//! An `AtomicRef` never owns what it points to. Here a configuration store
//! owns every version, and worker threads switch between borrowed versions
//! through an atomic slot. Dropping the slot frees nothing; the store is
//! still intact afterwards.

use prism3_concurrent::{
    AtomicRef,
    AtomicRefArray,
};
use std::thread;

#[derive(Debug, PartialEq)]
struct Config {
    version: u32,
    timeout_ms: u64,
}

/// Owns every configuration version for the lifetime of the program.
struct ConfigStore {
    versions: Vec<Config>,
}

impl ConfigStore {
    fn new() -> Self {
        let versions = (1..=4)
            .map(|version| Config {
                version,
                timeout_ms: 250 * version as u64,
            })
            .collect();
        Self { versions }
    }

    fn version(&self, version: u32) -> Option<&Config> {
        self.versions.iter().find(|config| config.version == version)
    }
}

/// Several threads race to promote their version; exactly one wins.
fn promote_once(store: &ConfigStore) {
    let active = AtomicRef::new(store.version(1));

    let winners: Vec<u32> = thread::scope(|s| {
        let handles: Vec<_> = (2..=4)
            .map(|version| {
                let active = &active;
                s.spawn(move || {
                    let expected = store.version(1);
                    let observed = active.compare_exchange(store.version(version), expected);
                    // The swap happened iff the slot still held version 1.
                    (observed.map(|c| c.version) == Some(1)).then_some(version)
                })
            })
            .collect();
        handles
            .into_iter()
            .filter_map(|handle| handle.join().unwrap())
            .collect()
    });

    println!("   promoted by: {:?}", winners);
    if let Some(config) = active.read_acquire_fence() {
        println!("   active now: v{} ({} ms timeout)", config.version, config.timeout_ms);
    }
    // `active` goes out of scope here; the store keeps every version.
}

/// Identity and value equality are different questions.
fn identity_versus_value(store: &ConfigStore) {
    let lookalike = Config {
        version: 2,
        timeout_ms: 500,
    };
    let slot = AtomicRef::new(store.version(2));

    println!("   equal by value to a copy: {}", slot == AtomicRef::new(Some(&lookalike)));
    println!("   holds that copy: {}", slot.is(Some(&lookalike)));

    // The comparand must be the very reference stored, not an equal one.
    let observed = slot.compare_exchange(store.version(3), Some(&lookalike));
    println!(
        "   swap with lookalike comparand: observed v{}, still v{}",
        observed.map_or(0, |c| c.version),
        slot.read_full_fence().map_or(0, |c| c.version)
    );
}

/// Readers iterate a snapshot while a writer keeps switching slots.
fn snapshot_while_writing(store: &ConfigStore) {
    let routes = match AtomicRefArray::from_vec(vec![store.version(1), None, store.version(2)]) {
        Ok(routes) => routes,
        Err(err) => {
            eprintln!("   {}", err);
            return;
        }
    };

    let snapshot = routes.iter();
    routes.set(1, store.version(4));
    routes.exchange(0, None);

    let before: Vec<_> = snapshot.map(|c| c.map(|c| c.version)).collect();
    let after: Vec<_> = routes.iter().map(|c| c.map(|c| c.version)).collect();
    println!("   snapshot: {:?}", before);
    println!("   live:     {:?}", after);
}

fn main() {
    println!("=== Atomic Reference Example ===\n");

    let store = ConfigStore::new();

    println!("Promote once:");
    promote_once(&store);

    println!("\nIdentity versus value:");
    identity_versus_value(&store);

    println!("\nSnapshot while writing:");
    snapshot_while_writing(&store);

    println!("\nStore still owns {} versions", store.versions.len());
}
