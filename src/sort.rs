//! Public entry points: range validation, scratch allocation and the
//! insertion / merge / radix dispatch.

use thiserror::Error;

use crate::config::{insertion_sort_threshold, mergesort_threshold, minimum_thread_workload};
use crate::insertion::insertion_sort;
use crate::merge::mergesort;
use crate::parallel::parallel_radix_sort;
use crate::radix::radix_sort;

/// Errors returned for malformed sort ranges.
///
/// Both are detected before any allocation or mutation, so a failed call
/// leaves the array bit-identical to its pre-call state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// The range runs backwards.
    #[error("from_index ({from}) > to_index ({to})")]
    InvalidRange { from: usize, to: usize },
    /// The range reaches past the end of the array.
    #[error("index {index} out of bounds for array of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Sort the whole array into non-decreasing order.
pub fn parallel_sort(array: &mut [i32]) {
    let to = array.len();
    parallel_sort_range(array, 0, to).expect("the full range is always in bounds");
}

/// Sort `array[from..to)` into non-decreasing order.
///
/// Elements outside the range are left untouched, and the sorted range is
/// bit for bit what a stable comparison sort would produce. Depending on
/// the range length the call runs an in-place insertion sort, a
/// two-buffer mergesort, or a serial or parallel MSD radix sort; the
/// radix paths allocate one scratch buffer of the range length.
pub fn parallel_sort_range(array: &mut [i32], from: usize, to: usize) -> Result<(), SortError> {
    if from > to {
        return Err(SortError::InvalidRange { from, to });
    }
    if to > array.len() {
        return Err(SortError::OutOfBounds {
            index: to,
            len: array.len(),
        });
    }

    let range_length = to - from;
    if range_length < 2 {
        return Ok(());
    }

    if range_length <= insertion_sort_threshold() {
        insertion_sort(&mut array[from..to]);
        return Ok(());
    }

    let mut buffer = vec![0i32; range_length];
    let range = &mut array[from..to];

    if range_length <= mergesort_threshold() {
        mergesort(range, &mut buffer, 0);
    } else {
        let cpus = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        let threads = (range_length / minimum_thread_workload()).min(cpus).max(1);
        if threads == 1 {
            radix_sort(range, &mut buffer, 0);
        } else {
            parallel_radix_sort(range, &mut buffer, 0, threads);
        }
    }

    // Depth-0 passes leave the sorted range on the scratch side; gather
    // it back into the caller's array.
    range.copy_from_slice(&buffer);
    Ok(())
}
