/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_concurrent::atomic::decode_bool;
use prism3_concurrent::ConcurrentError;

#[test]
fn test_decode_bool() {
    assert_eq!(decode_bool(0), Ok(false));
    assert_eq!(decode_bool(1), Ok(true));
    assert_eq!(decode_bool(2), Err(ConcurrentError::BoolOutOfRange(2)));
    assert_eq!(decode_bool(-1), Err(ConcurrentError::BoolOutOfRange(-1)));
}

macro_rules! test_atomic_bool {
    ($atomic_type:ident, $test_mod:ident) => {
        mod $test_mod {
            use prism3_concurrent::atomic::$atomic_type;
            use std::sync::atomic::Ordering;
            use std::sync::Arc;
            use std::thread;

            #[test]
            fn test_new() {
                let atomic = <$atomic_type>::new(true);
                assert!(atomic.read_full_fence());
                let atomic = <$atomic_type>::new(false);
                assert!(!atomic.read_full_fence());
            }

            #[test]
            fn test_default() {
                let atomic = <$atomic_type>::default();
                assert!(!atomic.read_full_fence());
            }

            #[test]
            fn test_from() {
                let atomic = <$atomic_type>::from(true);
                assert!(atomic.read_acquire_fence());
            }

            #[test]
            fn test_fence_levels() {
                let atomic = <$atomic_type>::new(false);
                atomic.write_unfenced(true);
                assert!(atomic.read_unfenced());
                atomic.write_release_fence(false);
                assert!(!atomic.read_acquire_fence());
                atomic.write_full_fence(true);
                assert!(atomic.read_full_fence());
                atomic.write_compiler_only_fence(false);
                assert!(!atomic.read_compiler_only_fence());
            }

            #[test]
            fn test_slot_is_encoded_as_zero_or_one() {
                let atomic = <$atomic_type>::new(true);
                assert_eq!(atomic.inner().load(Ordering::SeqCst), 1);
                atomic.write_full_fence(false);
                assert_eq!(atomic.inner().load(Ordering::SeqCst), 0);
            }

            #[test]
            fn test_compare_exchange() {
                let atomic = <$atomic_type>::new(false);
                // Comparand true does not match the stored false.
                assert!(!atomic.compare_exchange(false, true));
                assert!(!atomic.read_full_fence());

                let prev = atomic.compare_exchange(true, false);
                assert!(!prev);
                assert!(atomic.read_full_fence());
            }

            #[test]
            fn test_compare_set() {
                let atomic = <$atomic_type>::new(false);
                assert!(atomic.compare_set(false, true).is_ok());
                match atomic.compare_set(false, false) {
                    Ok(_) => panic!("Should fail"),
                    Err(actual) => assert!(actual),
                }
                assert!(atomic.read_full_fence());
            }

            #[test]
            fn test_exchange() {
                let atomic = <$atomic_type>::new(false);
                assert!(!atomic.exchange(true));
                assert!(atomic.exchange(true));
                assert!(atomic.read_full_fence());
            }

            #[test]
            #[should_panic(expected = "0 or 1")]
            fn test_corrupted_slot_panics_on_read() {
                let atomic = <$atomic_type>::new(false);
                atomic.inner().store(7, Ordering::SeqCst);
                atomic.read_acquire_fence();
            }

            #[test]
            fn test_equality_and_display() {
                let a = <$atomic_type>::new(true);
                let b = <$atomic_type>::new(true);
                assert_eq!(a, b);
                b.write_full_fence(false);
                assert_ne!(a, b);
                assert_eq!(format!("{}", a), "true");
                assert!(format!("{:?}", b).contains("false"));
            }

            #[test]
            fn test_concurrent_single_winner() {
                let flag = Arc::new(<$atomic_type>::new(false));
                let mut handles = vec![];

                for _ in 0..10 {
                    let flag = flag.clone();
                    let handle = thread::spawn(move || !flag.compare_exchange(true, false));
                    handles.push(handle);
                }

                let winners = handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap())
                    .filter(|won| *won)
                    .count();
                assert_eq!(winners, 1);
                assert!(flag.read_full_fence());
            }
        }
    };
}

test_atomic_bool!(AtomicBool, atomic_bool_tests);
test_atomic_bool!(PaddedAtomicBool, padded_atomic_bool_tests);
