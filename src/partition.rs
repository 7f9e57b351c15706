//! Balanced partitioning of a sequence into a fixed number of buckets.
//!
//! `partition` divides a sequence into exactly `k` buckets whose sizes
//! differ by at most one. The division is deterministic: elements are
//! chunked in order, and when the length does not divide evenly, the
//! leftover elements are redistributed one by one, each prepended to the
//! next bucket in rotation.
//!
//! The redistribution is observable in the output. Redistributed elements
//! sit at the front of their buckets, and the bucket list comes out rotated
//! left by the number of elements that were moved:
//!
//! ```rust
//! use remold::partition;
//!
//! let buckets = partition(vec![1, 2, 3, 4, 5, 6], 4);
//! assert_eq!(buckets, vec![vec![3], vec![4], vec![5, 1], vec![6, 2]]);
//! ```
//!
//! That exact arrangement is part of the contract; callers shard work by
//! relying on it.

use crate::error::{RemoldError, Result};

/// Divide `items` into exactly `buckets` buckets with sizes within one of
/// each other.
///
/// The algorithm never inspects the elements, only moves them. Panics when
/// `buckets` is zero; [`try_partition`] reports it as an error instead.
pub fn partition<T>(items: Vec<T>, buckets: usize) -> Vec<Vec<T>> {
    match try_partition(items, buckets) {
        Ok(out) => out,
        Err(err) => panic!("{}", err),
    }
}

/// Divide `items` into exactly `buckets` buckets with sizes within one of
/// each other.
///
/// Fails with `InvalidBucketCount` when `buckets` is zero. When there are
/// fewer items than buckets, the leading buckets hold one item each and the
/// rest are empty.
pub fn try_partition<T>(items: Vec<T>, buckets: usize) -> Result<Vec<Vec<T>>> {
    if buckets == 0 {
        return Err(RemoldError::InvalidBucketCount(0));
    }

    let size = items.len() / buckets;
    if size == 0 {
        let mut out: Vec<Vec<T>> = items.into_iter().map(|item| vec![item]).collect();
        out.resize_with(buckets, Vec::new);
        return Ok(out);
    }

    // Chunk in order; an uneven length leaves more than `buckets` chunks
    let mut chunks: Vec<Vec<T>> = Vec::new();
    let mut current = Vec::with_capacity(size);
    for item in items {
        current.push(item);
        if current.len() == size {
            chunks.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    // First `buckets` chunks are the base; everything past them is
    // redistributed, each element prepended to the next bucket in rotation
    let extras = chunks.split_off(buckets);
    let mut out = chunks;
    let mut moved = 0;
    for item in extras.into_iter().flatten() {
        out[moved % buckets].insert(0, item);
        moved += 1;
    }
    out.rotate_left(moved % buckets);

    Ok(out)
}
