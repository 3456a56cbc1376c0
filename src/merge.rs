//! Two-buffer mergesort over insertion-sorted base runs.
//!
//! The source range is cut into runs of the insertion-sort threshold and
//! each run is sorted in place; adjacent runs are then merged while
//! ping-ponging between the two buffers. Which buffer must hold the final
//! result is fixed by the caller's recursion-depth parity (even depths:
//! `target`, odd depths: `source`), so a corrective bulk copy runs when
//! the ping-pong ends on the wrong side.

use crate::config::insertion_sort_threshold;
use crate::insertion::insertion_sort;

/// Sort `source` into the parity-selected buffer, clobbering both.
///
/// `source` and `target` must have equal length and the authoritative
/// data must be in `source` on entry. On return the sorted range sits in
/// `target` at even `recursion_depth` and in `source` at odd.
pub(crate) fn mergesort(source: &mut [i32], target: &mut [i32], recursion_depth: usize) {
    debug_assert_eq!(source.len(), target.len());

    let range_length = source.len();
    let run_length = insertion_sort_threshold();

    let mut offset = 0;
    while offset < range_length {
        let end = (offset + run_length).min(range_length);
        insertion_sort(&mut source[offset..end]);
        offset = end;
    }

    let mut runs = range_length.div_ceil(run_length);
    let mut run_width = run_length;
    let mut passes = 0usize;
    let mut s: &mut [i32] = source;
    let mut t: &mut [i32] = target;

    while runs > 1 {
        passes += 1;
        let mut run_index = 0;
        while run_index + 1 < runs {
            let left = run_index * run_width;
            let left_bound = left + run_width;
            let right_bound = (left_bound + run_width).min(range_length);
            merge(
                &s[left..left_bound],
                &s[left_bound..right_bound],
                &mut t[left..right_bound],
            );
            run_index += 2;
        }
        if run_index != runs {
            // Move the lonely leftover run through to the other side.
            let tail = run_index * run_width;
            t[tail..].copy_from_slice(&s[tail..]);
        }

        std::mem::swap(&mut s, &mut t);
        runs = runs.div_ceil(2);
        run_width *= 2;
    }

    // The merged data sits in `s`; an even number of passes means `s` is
    // still the buffer passed as `source`. Copy over when the parity rule
    // demands the other side.
    if recursion_depth % 2 == passes % 2 {
        t.copy_from_slice(s);
    }
}

/// Two-pointer merge of two sorted runs into `out`; the trailing tail of
/// whichever side remains is moved by bulk copy.
fn merge(left: &[i32], right: &[i32], out: &mut [i32]) {
    debug_assert_eq!(left.len() + right.len(), out.len());

    let mut l = 0;
    let mut r = 0;
    let mut o = 0;
    while l < left.len() && r < right.len() {
        if left[l] < right[r] {
            out[o] = left[l];
            l += 1;
        } else {
            out[o] = right[r];
            r += 1;
        }
        o += 1;
    }
    if l < left.len() {
        out[o..].copy_from_slice(&left[l..]);
    } else {
        out[o..].copy_from_slice(&right[r..]);
    }
}
