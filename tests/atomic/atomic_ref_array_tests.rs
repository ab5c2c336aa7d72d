/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_concurrent::atomic::{
    AtomicRefArray,
    PaddedAtomicRefArray,
};
use prism3_concurrent::ConcurrentError;
use std::thread;

#[test]
fn test_new_is_all_null() {
    let array = AtomicRefArray::<i32>::new(3).unwrap();
    assert_eq!(array.len(), 3);
    assert!(!array.is_empty());
    assert!(array.iter().all(|slot| slot.is_none()));
}

#[test]
fn test_zero_length_is_rejected() {
    assert_eq!(
        AtomicRefArray::<i32>::new(0).unwrap_err(),
        ConcurrentError::LengthOutOfRange(0)
    );
    assert_eq!(
        PaddedAtomicRefArray::<i32>::from_vec(Vec::new()).unwrap_err(),
        ConcurrentError::LengthOutOfRange(0)
    );
}

#[test]
fn test_from_vec_keeps_order() {
    let (a, b) = (1, 2);
    let array = AtomicRefArray::from_vec(vec![Some(&a), None, Some(&b)]).unwrap();
    assert_eq!(array.len(), 3);
    assert_eq!(array.get(0), Some(&1));
    assert_eq!(array.get(1), None);
    assert_eq!(array.get(2), Some(&2));
}

#[test]
fn test_per_index_fence_levels() {
    let values = [10, 20, 30, 40];
    let array = AtomicRefArray::new(4).unwrap();

    array.write_unfenced(0, Some(&values[0]));
    array.write_release_fence(1, Some(&values[1]));
    array.write_full_fence(2, Some(&values[2]));
    array.write_compiler_only_fence(3, Some(&values[3]));

    assert_eq!(array.read_unfenced(0), Some(&10));
    assert_eq!(array.read_acquire_fence(1), Some(&20));
    assert_eq!(array.read_full_fence(2), Some(&30));
    assert_eq!(array.read_compiler_only_fence(3), Some(&40));
}

#[test]
fn test_slots_are_independent() {
    let value = 5;
    let array = AtomicRefArray::new(2).unwrap();
    array.set(0, Some(&value));
    assert_eq!(array.get(0), Some(&5));
    assert_eq!(array.get(1), None);
}

#[test]
fn test_compare_exchange_per_index() {
    let (a, b, c) = (1, 2, 3);
    let array = AtomicRefArray::from_vec(vec![Some(&a), Some(&b)]).unwrap();

    assert_eq!(array.compare_exchange(0, Some(&c), Some(&a)), Some(&1));
    assert_eq!(array.get(0), Some(&3));

    // Slot 1 holds `b`, not `a`.
    assert_eq!(array.compare_exchange(1, Some(&c), Some(&a)), Some(&2));
    assert_eq!(array.get(1), Some(&2));
}

#[test]
fn test_exchange_per_index() {
    let (a, b) = (1, 2);
    let array = AtomicRefArray::from_vec(vec![Some(&a), None]).unwrap();
    assert_eq!(array.exchange(1, Some(&b)), None);
    assert_eq!(array.exchange(0, None), Some(&1));
    assert_eq!(array.snapshot(), vec![None, Some(&2)]);
}

#[test]
#[should_panic]
fn test_out_of_range_index_panics() {
    let array = AtomicRefArray::<i32>::new(2).unwrap();
    array.get(2);
}

#[test]
fn test_snapshot_ignores_later_writes() {
    let (a, b, c) = (1, 2, 3);
    let array = AtomicRefArray::from_vec(vec![Some(&a), Some(&b)]).unwrap();

    let mut snapshot = array.iter();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.next(), Some(Some(&1)));

    array.set(1, Some(&c));
    assert_eq!(snapshot.next(), Some(Some(&2)));
    assert_eq!(snapshot.next(), None);

    // A fresh iteration sees the write.
    let fresh: Vec<_> = (&array).into_iter().collect();
    assert_eq!(fresh, vec![Some(&1), Some(&3)]);
}

#[test]
fn test_snapshot_iterates_both_ends() {
    let values = [1, 2, 3];
    let array = AtomicRefArray::from_vec(values.iter().map(Some).collect()).unwrap();
    let reversed: Vec<_> = array.iter().rev().flatten().copied().collect();
    assert_eq!(reversed, vec![3, 2, 1]);
}

#[test]
fn test_equality_and_debug() {
    let (a, also_a) = (1, 1);
    let left = AtomicRefArray::from_vec(vec![Some(&a), None]).unwrap();
    let right = AtomicRefArray::from_vec(vec![Some(&also_a), None]).unwrap();
    assert_eq!(left, right);
    assert_eq!(format!("{:?}", left), "[Some(1), None]");
}

#[test]
fn test_padded_behaves_like_inline() {
    let (a, b) = (1, 2);
    let array = PaddedAtomicRefArray::from_vec(vec![Some(&a), None, None]).unwrap();
    assert_eq!(array.compare_exchange(2, Some(&b), None), None);
    assert_eq!(array.snapshot(), vec![Some(&1), None, Some(&2)]);
}

#[test]
fn test_concurrent_writers_to_distinct_slots() {
    let values: Vec<usize> = (0..8).collect();
    let array = PaddedAtomicRefArray::new(values.len()).unwrap();

    thread::scope(|s| {
        for (index, value) in values.iter().enumerate() {
            let array = &array;
            s.spawn(move || array.write_release_fence(index, Some(value)));
        }
    });

    let seen: Vec<usize> = array.iter().map(|slot| *slot.unwrap()).collect();
    assert_eq!(seen, values);
}
