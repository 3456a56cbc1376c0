//! Byte-bucket extraction and the serial MSD radix pass.

use crate::config::mergesort_threshold;
use crate::merge::mergesort;

/// The number of sort buckets; one key byte is consumed per depth.
pub(crate) const BUCKETS: usize = 256;

/// The terminal recursion depth. Depth `d` consumes byte `3 - d` counted
/// from the least significant byte, so depth 3 consumes the lowest byte.
pub(crate) const DEEPEST_RECURSION_DEPTH: usize = 3;

const SIGN_BIT_MASK: i32 = i32::MIN;

/// Bucket index of `key` at `depth`.
///
/// At depth 0 the sign bit is flipped first, which remaps the signed key
/// range onto the unsigned one in order-preserving fashion. Deeper bytes
/// are taken verbatim: within a top-byte bucket all keys share a sign.
#[inline]
pub(crate) fn bucket_index(key: i32, depth: usize) -> usize {
    let bits = if depth == 0 { key ^ SIGN_BIT_MASK } else { key } as u32;
    ((bits >> ((DEEPEST_RECURSION_DEPTH - depth) * 8)) & 0xff) as usize
}

/// Prefix-sum a bucket histogram into per-bucket start offsets.
#[inline]
pub(crate) fn start_index_map(bucket_sizes: &[usize; BUCKETS]) -> [usize; BUCKETS] {
    let mut start_indices = [0usize; BUCKETS];
    for i in 1..BUCKETS {
        start_indices[i] = start_indices[i - 1] + bucket_sizes[i - 1];
    }
    start_indices
}

/// One serial MSD radix pass: count, prefix-sum, scatter, then recurse
/// per non-empty bucket with the buffer roles swapped.
///
/// `source` and `target` must have equal length and the authoritative
/// data must be in `source` on entry. The sorted range lands in `target`
/// at even depths and in `source` at odd ones, the same residency
/// contract as [`mergesort`].
pub(crate) fn radix_sort(source: &mut [i32], target: &mut [i32], depth: usize) {
    debug_assert_eq!(source.len(), target.len());

    if source.len() <= mergesort_threshold() {
        mergesort(source, target, depth);
        return;
    }

    let mut bucket_sizes = [0usize; BUCKETS];
    for &key in source.iter() {
        bucket_sizes[bucket_index(key, depth)] += 1;
    }

    let start_indices = start_index_map(&bucket_sizes);

    let mut processed = [0usize; BUCKETS];
    for &key in source.iter() {
        let bucket = bucket_index(key, depth);
        target[start_indices[bucket] + processed[bucket]] = key;
        processed[bucket] += 1;
    }

    if depth == DEEPEST_RECURSION_DEPTH {
        // All four bytes are consumed; the copy-back restores the
        // odd-depth residency.
        source.copy_from_slice(target);
        return;
    }

    let mut child_source: &mut [i32] = target;
    let mut child_target: &mut [i32] = source;
    for &size in bucket_sizes.iter() {
        let (source_bucket, source_rest) =
            std::mem::take(&mut child_source).split_at_mut(size);
        let (target_bucket, target_rest) =
            std::mem::take(&mut child_target).split_at_mut(size);
        if size != 0 {
            radix_sort(source_bucket, target_bucket, depth + 1);
        }
        child_source = source_rest;
        child_target = target_rest;
    }
}
