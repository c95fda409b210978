//! Dutch national flag partition over {0, 1, 2}.
//!
//! Variables:
//!   low  : usize — next slot for a 0
//!   mid  : usize — element under inspection
//!   high : usize — one past the last unplaced slot for a 2
//!
//! Equations:
//!   arr[..low] == 0,  arr[low..mid] == 1,  arr[high..] == 2
//!   arr[mid] == 0 => swap(low, mid), low += 1, mid += 1
//!   arr[mid] == 1 => mid += 1
//!   arr[mid] == 2 => high -= 1, swap(mid, high)                    O(N)

use super::check_domain;
use crate::error::Result;

pub fn sort_colors(arr: &mut [u8]) -> Result<()> {
    check_domain(arr, 3, "0, 1 or 2")?;

    let (mut low, mut mid, mut high) = (0, 0, arr.len());
    while mid < high {
        match arr[mid] {
            0 => {
                arr.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            _ => {
                high -= 1;
                arr.swap(mid, high);
            }
        }
    }
    Ok(())
}
