//! Split an array into at most `k` contiguous parts minimising the largest
//! part sum, by binary search over the answer.
//!
//! The answer lies between `max(nums)` (every element must fit in some part)
//! and `sum(nums)` (one part holding everything). Whether a cap `m` is
//! achievable is decided by a greedy scan that opens a new part whenever the
//! next element would push the running sum past `m`. The number of parts the
//! scan needs never increases as `m` grows, so the smallest feasible cap can
//! be found by bisection.

use std::ops::Range;

use crate::error::{LabError, Result};

/// Number of contiguous parts the greedy scan needs so that no part exceeds
/// `cap`.
///
/// Intended for `cap >= max(nums)`; an element larger than `cap` still gets
/// a part of its own.
pub fn parts_needed(nums: &[u64], cap: u64) -> usize {
    let mut count = 1;
    let mut running = 0u64;
    for &value in nums {
        if running.saturating_add(value) > cap {
            count += 1;
            running = 0;
        }
        running = running.saturating_add(value);
    }
    count
}

/// Index ranges of the parts produced by the greedy scan for `cap`.
///
/// ```
/// use dp_lab::problems::split_array::greedy_partition;
///
/// let parts = greedy_partition(&[7, 2, 5, 10, 8], 18);
/// assert_eq!(parts, vec![0..3, 3..5]);
/// ```
pub fn greedy_partition(nums: &[u64], cap: u64) -> Vec<Range<usize>> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut running = 0u64;
    for (idx, &value) in nums.iter().enumerate() {
        if idx > start && running.saturating_add(value) > cap {
            parts.push(start..idx);
            start = idx;
            running = 0;
        }
        running = running.saturating_add(value);
    }
    if start < nums.len() {
        parts.push(start..nums.len());
    }
    parts
}

/// Smallest achievable largest-part sum when splitting `nums` into at most
/// `k` contiguous parts.
///
/// ```
/// use dp_lab::problems::split_array::minimize_largest_sum;
///
/// assert_eq!(minimize_largest_sum(&[7, 2, 5, 10, 8], 2).unwrap(), 18);
/// ```
pub fn minimize_largest_sum(nums: &[u64], k: usize) -> Result<u64> {
    if k == 0 {
        return Err(LabError::ZeroParts);
    }
    let mut lo = nums.iter().copied().max().ok_or(LabError::EmptySet)?;
    let mut hi = nums.iter().fold(0u64, |acc, &v| acc.saturating_add(v));
    let mut best = hi;

    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("minimize_largest_sum", n = nums.len(), k, lo, hi).entered();

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if parts_needed(nums, mid) <= k {
            best = mid;
            match mid.checked_sub(1) {
                Some(next) => hi = next,
                None => break,
            }
        } else {
            lo = mid + 1;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(best, "largest part sum minimised");

    Ok(best)
}

/// Optimal largest-part sum together with the parts achieving it.
///
/// The greedy layout may use fewer than `k` parts.
pub fn split_array(nums: &[u64], k: usize) -> Result<(u64, Vec<Range<usize>>)> {
    let best = minimize_largest_sum(nums, k)?;
    Ok((best, greedy_partition(nums, best)))
}
