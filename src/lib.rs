//! Parallel MSD (most significant digit) radix sort for `i32` slices.
//!
//! The engine sorts a contiguous range into non-decreasing order, matching
//! a comparison sort bit for bit and leaving elements outside the range
//! untouched. One byte is consumed per recursion depth, so there are 256
//! buckets; the sign bit is honoured at the top byte so that bucket order
//! agrees with signed comparison.
//!
//! Large ranges are counted and scattered by plain OS worker threads with
//! per-thread bucket counts and disjoint write regions. Small ranges fall
//! back to a two-buffer mergesort over insertion-sorted runs, and tiny
//! ranges to plain insertion sort.
//!
//! Three process-wide thresholds steer the dispatch; see
//! [`set_insertion_sort_threshold`], [`set_mergesort_threshold`] and
//! [`set_minimum_thread_workload`]. Callers that tune and sort from
//! several threads can serialize both through [`locked`].

mod config;
mod insertion;
mod merge;
mod parallel;
mod radix;
mod sort;

pub mod locked;

pub use config::{
    set_insertion_sort_threshold, set_mergesort_threshold, set_minimum_thread_workload,
};
pub use sort::{SortError, parallel_sort, parallel_sort_range};
