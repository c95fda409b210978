use std::cmp::Ordering;

use tracing::debug;

use super::sorted_copy;
use crate::error::{Result, TwoPointerError};

/// Sum of some triple as close as possible to `target`.
///
/// Ties keep whichever sum was found first. An exact hit returns `target`
/// immediately. Fewer than three elements is a [`TwoPointerError::TooShort`].
pub fn three_sum_closest(nums: &[i32], target: i64) -> Result<i64> {
    if nums.len() < 3 {
        return Err(TwoPointerError::TooShort { required: 3, actual: nums.len() });
    }
    let s = sorted_copy(nums);
    let n = s.len();
    let mut closest = i64::from(s[0]) + i64::from(s[1]) + i64::from(s[2]);

    for i in 0..n - 2 {
        let (mut lo, mut hi) = (i + 1, n - 1);
        while lo < hi {
            let sum = i64::from(s[i]) + i64::from(s[lo]) + i64::from(s[hi]);
            if sum.abs_diff(target) < closest.abs_diff(target) {
                closest = sum;
            }
            match sum.cmp(&target) {
                Ordering::Less => lo += 1,
                Ordering::Greater => hi -= 1,
                Ordering::Equal => {
                    debug!(len = n, target, "three_sum_closest exact");
                    return Ok(target);
                }
            }
        }
    }

    debug!(len = n, target, closest, "three_sum_closest");
    Ok(closest)
}
