//! Threshold mutation tests. These live in their own test binary so the
//! process-wide knobs they twist are never shared with the other suites;
//! every assertion is still output-based, so the tests in this file stay
//! correct no matter how they interleave.

use par_radix_sort::locked;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn assert_sorted_range(mut array: Vec<i32>, from: usize, to: usize) -> Vec<i32> {
    let mut expected = array.clone();
    expected[from..to].sort();
    locked::parallel_sort_range(&mut array, from, to).unwrap();
    assert_eq!(array, expected);
    array
}

#[test]
fn output_is_invariant_across_thresholds() {
    let mut rng = StdRng::seed_from_u64(2023);
    let input: Vec<i32> = (0..50_000).map(|_| rng.r#gen()).collect();
    let from = 17;
    let to = input.len() - 17;

    let mut baseline = None;
    for (insertion, merge, workload) in [
        (13, 4001, 65536),
        (1, 1, 1),
        (7, 61, 4001),
        (1000, 2000, 1),
        (13, 100_000, 65536),
    ] {
        locked::set_insertion_sort_threshold(insertion);
        locked::set_mergesort_threshold(merge);
        locked::set_minimum_thread_workload(workload);

        let sorted = assert_sorted_range(input.clone(), from, to);
        match &baseline {
            None => baseline = Some(sorted),
            Some(first) => assert_eq!(&sorted, first),
        }
    }
}

#[test]
fn forced_radix_handles_one_element_per_bucket() {
    // Dropping the merge threshold sends even a 256-element range through
    // the top-byte radix pass, one element per bucket.
    locked::set_mergesort_threshold(1);
    locked::set_insertion_sort_threshold(1);

    let mut rng = StdRng::seed_from_u64(5);
    let mut array: Vec<i32> = (0..256).map(|i| i << 24).collect();
    array.shuffle(&mut rng);
    let to = array.len();
    assert_sorted_range(array, 0, to);
}

#[test]
fn forced_parallel_path_agrees_with_reference() {
    // A tiny workload makes every core eligible even for modest arrays.
    locked::set_minimum_thread_workload(1);
    locked::set_mergesort_threshold(1);

    let mut rng = StdRng::seed_from_u64(99);
    let array: Vec<i32> = (0..100_000).map(|_| rng.gen_range(-1000..1000)).collect();
    let to = array.len();
    assert_sorted_range(array, 5, to - 5);
}

#[test]
fn zero_thresholds_are_clamped_silently() {
    locked::set_insertion_sort_threshold(0);
    locked::set_mergesort_threshold(0);
    locked::set_minimum_thread_workload(0);

    let mut rng = StdRng::seed_from_u64(1);
    let array: Vec<i32> = (0..10_000).map(|_| rng.r#gen()).collect();
    let to = array.len();
    assert_sorted_range(array, 0, to);
}
