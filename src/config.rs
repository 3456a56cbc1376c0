//! Process-wide tuning thresholds, read with relaxed atomics.
//!
//! Each setter silently clamps its argument to a positive minimum. The
//! engine reads a threshold once at each decision point, so a mid-sort
//! change only affects later decisions of that call; callers that need
//! the knobs pinned across whole sorts go through [`crate::locked`].

use std::sync::atomic::{AtomicUsize, Ordering};

/// Ranges at most this long are sorted with insertion sort; also the base
/// run width of the mergesort fallback.
const DEFAULT_INSERTION_SORT_THRESHOLD: usize = 13;

/// Ranges at most this long are sorted with the merge-pass driver instead
/// of a radix pass.
const DEFAULT_MERGESORT_THRESHOLD: usize = 4001;

/// The minimum number of elements one worker thread must be worth.
const DEFAULT_THREAD_WORKLOAD: usize = 65536;

const MIN_INSERTION_SORT_THRESHOLD: usize = 1;
const MIN_MERGESORT_THRESHOLD: usize = 1;
const MIN_THREAD_WORKLOAD: usize = 1;

static INSERTION_SORT_THRESHOLD: AtomicUsize =
    AtomicUsize::new(DEFAULT_INSERTION_SORT_THRESHOLD);
static MERGESORT_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_MERGESORT_THRESHOLD);
static THREAD_WORKLOAD: AtomicUsize = AtomicUsize::new(DEFAULT_THREAD_WORKLOAD);

/// Set the insertion sort threshold, clamped to at least 1.
pub fn set_insertion_sort_threshold(new_threshold: usize) {
    INSERTION_SORT_THRESHOLD.store(
        new_threshold.max(MIN_INSERTION_SORT_THRESHOLD),
        Ordering::Relaxed,
    );
}

/// Set the mergesort threshold, clamped to at least 1.
pub fn set_mergesort_threshold(new_threshold: usize) {
    MERGESORT_THRESHOLD.store(new_threshold.max(MIN_MERGESORT_THRESHOLD), Ordering::Relaxed);
}

/// Set the minimum per-thread workload in elements, clamped to at least 1.
pub fn set_minimum_thread_workload(new_workload: usize) {
    THREAD_WORKLOAD.store(new_workload.max(MIN_THREAD_WORKLOAD), Ordering::Relaxed);
}

pub(crate) fn insertion_sort_threshold() -> usize {
    INSERTION_SORT_THRESHOLD.load(Ordering::Relaxed)
}

pub(crate) fn mergesort_threshold() -> usize {
    MERGESORT_THRESHOLD.load(Ordering::Relaxed)
}

pub(crate) fn minimum_thread_workload() -> usize {
    THREAD_WORKLOAD.load(Ordering::Relaxed)
}
