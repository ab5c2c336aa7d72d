/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_concurrent::util::next_power_of_two;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_smallest_power_at_least_input(n in 1i64..=(1 << 62)) {
        let power = next_power_of_two(n).unwrap();
        prop_assert_eq!(power.count_ones(), 1);
        prop_assert!(power >= n);
        prop_assert!(power / 2 < n);
    }
}
