//! Segregate 0s and 1s.
//!
//! Equations:
//!   invariant: arr[..left] == 0,  arr[right+1..] == 1
//!   arr[left] == 1 && arr[right] == 0  =>  swap, left += 1, right -= 1
//!   terminates when left >= right                                  O(N)

use tracing::debug;

use super::check_domain;
use crate::error::Result;

pub fn segregate_zeros_ones(arr: &mut [u8]) -> Result<()> {
    check_domain(arr, 2, "0 or 1")?;
    if arr.len() < 2 {
        return Ok(());
    }

    let (mut left, mut right) = (0, arr.len() - 1);
    let mut swaps = 0usize;
    while left < right {
        while left < right && arr[left] == 0 {
            left += 1;
        }
        while left < right && arr[right] == 1 {
            right -= 1;
        }
        if left < right {
            arr.swap(left, right);
            swaps += 1;
            left += 1;
            right -= 1;
        }
    }
    debug!(len = arr.len(), swaps, "segregate_zeros_ones");
    Ok(())
}
