use par_radix_sort::parallel_sort_range;
use proptest::prelude::*;

/// Value pool biased toward the signed boundaries.
fn keys() -> impl Strategy<Value = i32> {
    prop_oneof![
        8 => any::<i32>(),
        1 => Just(i32::MIN),
        1 => Just(i32::MAX),
        1 => Just(0),
        1 => -256..256i32,
    ]
}

proptest! {
    // The range output must match a stable comparison sort bit for bit,
    // and everything outside the range must come through untouched.
    #[test]
    fn prop_agrees_with_stable_sort(
        array in prop::collection::vec(keys(), 0..4200),
        from_pick in any::<prop::sample::Index>(),
        to_pick in any::<prop::sample::Index>(),
    ) {
        let from = from_pick.index(array.len() + 1);
        let to = from + to_pick.index(array.len() - from + 1);

        let mut expected = array.clone();
        expected[from..to].sort();

        let mut sorted = array;
        parallel_sort_range(&mut sorted, from, to).unwrap();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_sorting_is_idempotent(
        array in prop::collection::vec(keys(), 0..2048),
    ) {
        let to = array.len();
        let mut once = array;
        parallel_sort_range(&mut once, 0, to).unwrap();
        let mut twice = once.clone();
        parallel_sort_range(&mut twice, 0, to).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_backwards_ranges_never_touch_the_array(
        array in prop::collection::vec(any::<i32>(), 1..64),
        from_pick in any::<prop::sample::Index>(),
        to_pick in any::<prop::sample::Index>(),
    ) {
        let from = from_pick.index(array.len()) + 1;
        let to = to_pick.index(from);

        let mut attempted = array.clone();
        prop_assert!(parallel_sort_range(&mut attempted, from, to).is_err());
        prop_assert_eq!(attempted, array);
    }
}
