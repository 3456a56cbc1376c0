//! The parallel MSD radix pass: per-thread counting, lock-free scattering
//! into disjoint regions, and balanced bucket partitioning for recursion.
//!
//! Workers are plain OS threads joined at the end of each phase; the
//! calling thread always doubles as the last worker, which saves one
//! thread spawn per phase. A worker panic propagates out of the join as a
//! runtime fault.

use std::thread;

use rand::seq::SliceRandom;

use crate::radix::{BUCKETS, DEEPEST_RECURSION_DEPTH, bucket_index, radix_sort, start_index_map};

/// Shared raw view of one buffer, handed to scatter workers and recursive
/// task runners. All concurrent access goes to pairwise disjoint index
/// sets, so the stores need no synchronization.
#[derive(Clone, Copy)]
struct SharedBuffer {
    ptr: *mut i32,
    len: usize,
}

unsafe impl Send for SharedBuffer {}
unsafe impl Sync for SharedBuffer {}

impl SharedBuffer {
    fn new(slice: &mut [i32]) -> Self {
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
        }
    }

    /// Write `value` at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds, and no other thread may touch it while
    /// the enclosing thread scope is live.
    unsafe fn write(&self, index: usize, value: i32) {
        debug_assert!(index < self.len);
        unsafe { *self.ptr.add(index) = value }
    }

    /// Reborrow `len` elements at `offset` as a mutable slice.
    ///
    /// # Safety
    ///
    /// The region must be in bounds and disjoint from every other region
    /// handed out while the enclosing thread scope is live.
    unsafe fn slice_mut<'a>(&self, offset: usize, len: usize) -> &'a mut [i32] {
        debug_assert!(offset + len <= self.len);
        unsafe { std::slice::from_raw_parts_mut(self.ptr.add(offset), len) }
    }
}

/// One next-depth bucket queued for a worker group. Offsets apply to both
/// buffers because bucket regions sit at the same position in each.
struct SorterTask {
    offset: usize,
    len: usize,
    thread_budget: usize,
}

/// The parallel MSD radix pass. Residency contract identical to
/// [`radix_sort`]; only counting, scattering and per-bucket recursion are
/// spread over `threads` workers.
pub(crate) fn parallel_radix_sort(
    source: &mut [i32],
    target: &mut [i32],
    depth: usize,
    threads: usize,
) {
    debug_assert_eq!(source.len(), target.len());
    debug_assert!(threads >= 1);

    let range_length = source.len();
    let subrange_length = range_length / threads;

    // Phase 1: per-thread bucket counting over contiguous subranges. The
    // last subrange absorbs the division remainder and runs inline.
    let mut local_bucket_sizes: Vec<[usize; BUCKETS]> = Vec::with_capacity(threads);
    {
        let source = &*source;
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(threads - 1);
            for worker in 0..threads - 1 {
                let subrange =
                    &source[worker * subrange_length..(worker + 1) * subrange_length];
                handles.push(scope.spawn(move || count_buckets(subrange, depth)));
            }
            let last = count_buckets(&source[(threads - 1) * subrange_length..], depth);
            for handle in handles {
                local_bucket_sizes
                    .push(handle.join().expect("could not join a bucket counter thread"));
            }
            local_bucket_sizes.push(last);
        });
    }

    // Phase 2: reduce the local histograms and lay out the buckets.
    let mut bucket_sizes = [0usize; BUCKETS];
    for local in &local_bucket_sizes {
        for (total, count) in bucket_sizes.iter_mut().zip(local) {
            *total += count;
        }
    }
    let non_empty_buckets = bucket_sizes.iter().filter(|&&size| size != 0).count();
    let start_indices = start_index_map(&bucket_sizes);
    let spawn_degree = non_empty_buckets.min(threads);

    // Phase 3: each worker's processed-index map starts past the
    // contributions of all its predecessors, so concurrent writes into
    // one bucket fill its destination region exactly once.
    let mut processed_maps: Vec<[usize; BUCKETS]> = Vec::with_capacity(spawn_degree);
    processed_maps.push([0usize; BUCKETS]);
    for worker in 1..spawn_degree {
        let mut processed = processed_maps[worker - 1];
        for (entry, count) in processed.iter_mut().zip(&local_bucket_sizes[worker - 1]) {
            *entry += count;
        }
        processed_maps.push(processed);
    }

    {
        let shared_target = SharedBuffer::new(target);
        let source = &*source;
        let start_indices = &start_indices;
        thread::scope(|scope| {
            for worker in 0..spawn_degree - 1 {
                let subrange =
                    &source[worker * subrange_length..(worker + 1) * subrange_length];
                let mut processed = processed_maps[worker];
                scope.spawn(move || {
                    scatter(subrange, shared_target, start_indices, &mut processed, depth)
                });
            }
            // The last scatter worker covers the remaining subranges; its
            // processed map already accounts for every spawned worker.
            let mut processed = processed_maps[spawn_degree - 1];
            scatter(
                &source[(spawn_degree - 1) * subrange_length..],
                shared_target,
                start_indices,
                &mut processed,
                depth,
            );
        });
    }

    // Phase 4: leaf termination.
    if depth == DEEPEST_RECURSION_DEPTH {
        source.copy_from_slice(target);
        return;
    }

    // Phase 5: shuffle the non-empty bucket keys, then greedily pack them
    // into spawn_degree groups of roughly equal element count. The random
    // permutation keeps clustered large buckets off a single group.
    let mut bucket_keys: Vec<usize> =
        (0..BUCKETS).filter(|&bucket| bucket_sizes[bucket] != 0).collect();
    bucket_keys.shuffle(&mut rand::thread_rng());

    let mut thread_budgets = vec![threads / spawn_degree; spawn_degree];
    for budget in thread_budgets.iter_mut().take(threads % spawn_degree) {
        *budget += 1;
    }

    let optimal_group_length = range_length / spawn_degree;
    let mut task_groups: Vec<Vec<SorterTask>> =
        (0..spawn_degree).map(|_| Vec::new()).collect();
    let mut group = 0;
    let mut packed = 0;
    for &bucket in &bucket_keys {
        packed += bucket_sizes[bucket];
        task_groups[group].push(SorterTask {
            offset: start_indices[bucket],
            len: bucket_sizes[bucket],
            thread_budget: thread_budgets[group],
        });
        // The final group absorbs whatever the earlier ones left over.
        if packed >= optimal_group_length && group + 1 < spawn_degree {
            packed = 0;
            group += 1;
        }
    }

    // Phase 6: run the task groups, last one inline. Children receive the
    // buffers with swapped roles and restore residency on their own.
    let shared_source = SharedBuffer::new(source);
    let shared_target = SharedBuffer::new(target);
    thread::scope(|scope| {
        for tasks in &task_groups[..spawn_degree - 1] {
            scope.spawn(move || run_tasks(tasks, shared_source, shared_target, depth));
        }
        run_tasks(&task_groups[spawn_degree - 1], shared_source, shared_target, depth);
    });
}

/// Histogram one worker's subrange.
fn count_buckets(subrange: &[i32], depth: usize) -> [usize; BUCKETS] {
    let mut bucket_sizes = [0usize; BUCKETS];
    for &key in subrange {
        bucket_sizes[bucket_index(key, depth)] += 1;
    }
    bucket_sizes
}

/// Scatter one worker's subrange into the shared target.
fn scatter(
    subrange: &[i32],
    target: SharedBuffer,
    start_indices: &[usize; BUCKETS],
    processed: &mut [usize; BUCKETS],
    depth: usize,
) {
    for &key in subrange {
        let bucket = bucket_index(key, depth);
        // SAFETY: the processed-index maps partition each bucket's
        // destination region between workers, so exactly one thread in
        // the enclosing scope writes this index.
        unsafe { target.write(start_indices[bucket] + processed[bucket], key) }
        processed[bucket] += 1;
    }
}

/// Execute one group's task list sequentially, dispatching each bucket to
/// the parallel pass when its thread budget allows and to the serial pass
/// otherwise.
fn run_tasks(tasks: &[SorterTask], source: SharedBuffer, target: SharedBuffer, depth: usize) {
    for task in tasks {
        // SAFETY: every task covers one bucket region, and bucket regions
        // of all groups are pairwise disjoint in both buffers.
        let child_source = unsafe { target.slice_mut(task.offset, task.len) };
        let child_target = unsafe { source.slice_mut(task.offset, task.len) };
        if task.thread_budget > 1 {
            parallel_radix_sort(child_source, child_target, depth + 1, task.thread_budget);
        } else {
            radix_sort(child_source, child_target, depth + 1);
        }
    }
}
