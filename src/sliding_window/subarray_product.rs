//! Count of contiguous subarrays with product strictly below `k`.
//!
//! Variables:
//!   left, right : usize — window bounds, right inclusive
//!   prod        : u128  — product of nums[left..=right]
//!
//! Equations:
//!   grow:    prod *= nums[right]
//!   shrink:  while prod >= k { prod /= nums[left]; left += 1 }
//!   count += right - left + 1                                      O(N)

use tracing::debug;

use crate::error::{Result, TwoPointerError};

/// Elements must be positive; a zero is reported as [`TwoPointerError::ZeroElement`].
/// `k <= 1` admits no subarray.
pub fn num_subarray_product_less_than_k(nums: &[u32], k: u64) -> Result<u64> {
    if let Some(index) = nums.iter().position(|&v| v == 0) {
        return Err(TwoPointerError::ZeroElement { index });
    }
    if k <= 1 {
        return Ok(0);
    }

    let k = u128::from(k);
    let mut prod: u128 = 1;
    let mut left = 0;
    let mut count = 0u64;
    for (right, &v) in nums.iter().enumerate() {
        prod *= u128::from(v);
        while prod >= k {
            prod /= u128::from(nums[left]);
            left += 1;
        }
        count += (right + 1 - left) as u64;
    }

    debug!(len = nums.len(), count, "num_subarray_product_less_than_k");
    Ok(count)
}
