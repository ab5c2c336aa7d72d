/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate comprehensive tests for fenced atomic integer types.
///
/// Invoked once per layout so the inline and padded types run the same
/// suite.
#[macro_export]
macro_rules! test_atomic_integer {
    ($atomic_type:ident, $value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_concurrent::atomic::{
                $atomic_type,
                AtomicInteger,
                FencedAtomic,
            };
            use std::sync::Arc;
            use std::thread;

            #[test]
            fn test_new() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(atomic.read_full_fence(), 42);
            }

            #[test]
            fn test_default() {
                let atomic = <$atomic_type>::default();
                assert_eq!(atomic.read_full_fence(), 0);
            }

            #[test]
            fn test_from() {
                let atomic = <$atomic_type>::from(100);
                assert_eq!(atomic.read_full_fence(), 100);
            }

            #[test]
            fn test_unfenced_round_trip() {
                let atomic = <$atomic_type>::new(0);
                atomic.write_unfenced(11);
                assert_eq!(atomic.read_unfenced(), 11);
            }

            #[test]
            fn test_acquire_release_round_trip() {
                let atomic = <$atomic_type>::new(0);
                atomic.write_release_fence(12);
                assert_eq!(atomic.read_acquire_fence(), 12);
            }

            #[test]
            fn test_full_fence_round_trip() {
                let atomic = <$atomic_type>::new(0);
                atomic.write_full_fence(13);
                assert_eq!(atomic.read_full_fence(), 13);
            }

            #[test]
            fn test_compiler_only_round_trip() {
                let atomic = <$atomic_type>::new(0);
                atomic.write_compiler_only_fence(14);
                assert_eq!(atomic.read_compiler_only_fence(), 14);
            }

            #[test]
            fn test_mixed_fence_levels_observe_latest_write() {
                let atomic = <$atomic_type>::new(0);
                atomic.write_release_fence(5);
                assert_eq!(atomic.read_unfenced(), 5);
                assert_eq!(atomic.read_full_fence(), 5);
                assert_eq!(atomic.read_compiler_only_fence(), 5);
            }

            #[test]
            fn test_compare_exchange_success() {
                let atomic = <$atomic_type>::new(1);
                let prev = atomic.compare_exchange(0, 1);
                assert_eq!(prev, 1);
                assert_eq!(atomic.read_full_fence(), 0);
            }

            #[test]
            fn test_compare_exchange_failure() {
                let atomic = <$atomic_type>::new(1);
                let prev = atomic.compare_exchange(0, 0);
                assert_eq!(prev, 1);
                assert_eq!(atomic.read_full_fence(), 1);
            }

            #[test]
            fn test_compare_set() {
                let atomic = <$atomic_type>::new(10);
                assert!(atomic.compare_set(10, 20).is_ok());
                assert_eq!(atomic.read_full_fence(), 20);
                match atomic.compare_set(10, 30) {
                    Ok(_) => panic!("Should fail"),
                    Err(actual) => assert_eq!(actual, 20),
                }
                assert_eq!(atomic.read_full_fence(), 20);
            }

            #[test]
            fn test_exchange() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.exchange(20), 10);
                assert_eq!(atomic.read_full_fence(), 20);
            }

            #[test]
            fn test_increment_and_get() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.increment_and_get(), 11);
                assert_eq!(atomic.read_full_fence(), 11);
            }

            #[test]
            fn test_get_and_increment() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.get_and_increment(), 10);
                assert_eq!(atomic.read_full_fence(), 11);
            }

            #[test]
            fn test_decrement_and_get() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.decrement_and_get(), 9);
                assert_eq!(atomic.read_full_fence(), 9);
            }

            #[test]
            fn test_get_and_decrement() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.get_and_decrement(), 10);
                assert_eq!(atomic.read_full_fence(), 9);
            }

            #[test]
            fn test_add_and_get() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.add_and_get(5), 15);
                assert_eq!(atomic.add_and_get(-20), -5);
                assert_eq!(atomic.read_full_fence(), -5);
            }

            #[test]
            fn test_get_and_add() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.get_and_add(5), 10);
                assert_eq!(atomic.read_full_fence(), 15);
            }

            #[test]
            fn test_add_wraps_on_overflow() {
                let atomic = <$atomic_type>::new(<$value_type>::MAX);
                assert_eq!(atomic.increment_and_get(), <$value_type>::MIN);
                assert_eq!(atomic.decrement_and_get(), <$value_type>::MAX);
            }

            #[test]
            fn test_modulo_and_get() {
                let atomic = <$atomic_type>::new(12);
                let (value, original) = atomic.modulo_and_get(5);
                assert_eq!(value, 2);
                assert_eq!(original, 12);
                assert_eq!(atomic.read_full_fence(), 2);
            }

            #[test]
            fn test_modulo_and_get_negative() {
                let atomic = <$atomic_type>::new(-7);
                assert_eq!(atomic.modulo_and_get(3), (-1, -7));
            }

            #[test]
            #[should_panic(expected = "divisor of zero")]
            fn test_modulo_by_zero_panics() {
                let atomic = <$atomic_type>::new(12);
                atomic.modulo_and_get(0);
            }

            #[test]
            fn test_multiply_and_get() {
                let atomic = <$atomic_type>::new(2);
                let (value, original) = atomic.multiply_and_get(3);
                assert_eq!(value, 6);
                assert_eq!(original, 2);
                assert_eq!(atomic.read_full_fence(), 6);
            }

            #[test]
            fn test_multiply_by_zero() {
                let atomic = <$atomic_type>::new(9);
                assert_eq!(atomic.multiply_and_get(0), (0, 9));
            }

            #[test]
            fn test_update_and_get() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.update_and_get(|x| x * 2), 20);
                assert_eq!(atomic.read_full_fence(), 20);
            }

            #[test]
            fn test_get_and_update() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.get_and_update(|x| x * 2), 10);
                assert_eq!(atomic.read_full_fence(), 20);
            }

            #[test]
            fn test_equality_and_ordering() {
                let a = <$atomic_type>::new(1);
                let b = <$atomic_type>::new(2);
                assert_ne!(a, b);
                assert!(a < b);
                b.write_full_fence(1);
                assert_eq!(a, b);
                assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
            }

            #[test]
            fn test_debug_display() {
                let atomic = <$atomic_type>::new(42);
                let debug_str = format!("{:?}", atomic);
                assert!(debug_str.contains("42"));
                assert_eq!(format!("{}", atomic), "42");
            }

            #[test]
            fn test_inner() {
                use std::sync::atomic::Ordering;

                let atomic = <$atomic_type>::new(0);
                atomic.inner().store(42, Ordering::Relaxed);
                assert_eq!(atomic.read_acquire_fence(), 42);
            }

            #[test]
            fn test_trait_objects_agree() {
                fn exercise<A>(atomic: &A)
                where
                    A: AtomicInteger<Value = $value_type>,
                {
                    atomic.write_release_fence(12);
                    assert_eq!(atomic.modulo_and_get(5), (2, 12));
                    assert_eq!(atomic.multiply_and_get(3), (6, 2));
                    assert_eq!(atomic.compare_exchange(7, 6), 6);
                    assert_eq!(atomic.exchange(1), 7);
                    assert_eq!(FencedAtomic::read_full_fence(atomic), 1);
                }

                exercise(&<$atomic_type>::new(0));
            }

            #[test]
            fn test_concurrent_increment() {
                let counter = Arc::new(<$atomic_type>::new(0));
                let mut handles = vec![];

                for _ in 0..10 {
                    let counter = counter.clone();
                    let handle = thread::spawn(move || {
                        for _ in 0..100 {
                            counter.increment_and_get();
                        }
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(counter.read_full_fence(), 1000);
            }

            #[test]
            fn test_concurrent_decrement_and_get() {
                let counter = Arc::new(<$atomic_type>::new(1000));
                let mut handles = vec![];

                for _ in 0..10 {
                    let counter = counter.clone();
                    let handle = thread::spawn(move || {
                        for _ in 0..100 {
                            counter.decrement_and_get();
                        }
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(counter.read_full_fence(), 0);
            }

            #[test]
            fn test_concurrent_update_and_get_high_contention() {
                let counter = Arc::new(<$atomic_type>::new(0));
                let mut handles = vec![];

                for _ in 0..10 {
                    let counter = counter.clone();
                    let handle = thread::spawn(move || {
                        for _ in 0..100 {
                            counter.update_and_get(|x| x.wrapping_add(1));
                        }
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(counter.read_full_fence(), 1000);
            }

            #[test]
            fn test_concurrent_multiply_reports_distinct_originals() {
                let atomic = Arc::new(<$atomic_type>::new(1));
                let mut handles = vec![];

                for _ in 0..5 {
                    let atomic = atomic.clone();
                    handles.push(thread::spawn(move || atomic.multiply_and_get(2)));
                }

                let mut originals: Vec<$value_type> = handles
                    .into_iter()
                    .map(|handle| {
                        let (value, original) = handle.join().unwrap();
                        assert_eq!(value, original * 2);
                        original
                    })
                    .collect();
                originals.sort_unstable();

                // Each winning swap saw the previous winner's result.
                assert_eq!(originals, vec![1, 2, 4, 8, 16]);
                assert_eq!(atomic.read_full_fence(), 32);
            }
        }
    };
}
