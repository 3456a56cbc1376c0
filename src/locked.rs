//! Mutex-serialized front door for multithreaded tuning.
//!
//! The sort itself is reentrant, but the three thresholds are process
//! wide. Callers that tune and sort concurrently can route both through
//! this module so every sort observes one consistent configuration.

use std::sync::Mutex;

use crate::SortError;

static TUNING_LOCK: Mutex<()> = Mutex::new(());

/// Serialized [`crate::set_insertion_sort_threshold`].
pub fn set_insertion_sort_threshold(new_threshold: usize) {
    let _guard = TUNING_LOCK.lock().expect("tuning mutex poisoned");
    crate::set_insertion_sort_threshold(new_threshold);
}

/// Serialized [`crate::set_mergesort_threshold`].
pub fn set_mergesort_threshold(new_threshold: usize) {
    let _guard = TUNING_LOCK.lock().expect("tuning mutex poisoned");
    crate::set_mergesort_threshold(new_threshold);
}

/// Serialized [`crate::set_minimum_thread_workload`].
pub fn set_minimum_thread_workload(new_workload: usize) {
    let _guard = TUNING_LOCK.lock().expect("tuning mutex poisoned");
    crate::set_minimum_thread_workload(new_workload);
}

/// Serialized [`crate::parallel_sort`].
pub fn parallel_sort(array: &mut [i32]) {
    let _guard = TUNING_LOCK.lock().expect("tuning mutex poisoned");
    crate::parallel_sort(array);
}

/// Serialized [`crate::parallel_sort_range`].
pub fn parallel_sort_range(array: &mut [i32], from: usize, to: usize) -> Result<(), SortError> {
    let _guard = TUNING_LOCK.lock().expect("tuning mutex poisoned");
    crate::parallel_sort_range(array, from, to)
}
