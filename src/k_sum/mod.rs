//! Sorted two-pointer k-sum family.
//!
//! Variables:
//!   s      : Vec<i32>  — sorted working copy of the input, owned by the call
//!   n      : usize     — s.len()
//!   target : i64       — requested sum
//!
//! Equations:
//!   sum(t) = Σ t[m] as i64                      (widened accumulator)
//!   scan(lo, hi): lo < hi
//!     sum < target => lo += 1
//!     sum > target => hi -= 1
//!
//!   Dedup: an anchor or pointer never settles on a value equal to the one it
//!   just held, so tuples are unique by value.

pub mod four_sum;
pub mod invariant;
pub mod three_sum;
pub mod three_sum_closest;

pub type Triple = [i32; 3];
pub type Quad = [i32; 4];

/// Owned ascending copy of `nums`; the caller's slice is never reordered.
pub(crate) fn sorted_copy(nums: &[i32]) -> Vec<i32> {
    let mut s = nums.to_vec();
    s.sort_unstable();
    s
}

/// Sum of a tuple in the widened accumulator.
pub fn widened_sum(tuple: &[i32]) -> i64 {
    tuple.iter().map(|&v| i64::from(v)).sum()
}
