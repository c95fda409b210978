//! Squares of a sorted array, in sorted order.
//!
//! Equations:
//!   |nums[l]| < |nums[r]|  =>  out[pos] = nums[r]², r -= 1
//!   otherwise              =>  out[pos] = nums[l]², l += 1
//!   pos runs from N-1 down to 0                                    O(N)

/// `nums` must be sorted non-decreasing. Squares are widened to `i64`.
pub fn sorted_squares(nums: &[i32]) -> Vec<i64> {
    let mut out = vec![0i64; nums.len()];
    let (mut l, mut r) = (0, nums.len());
    for slot in out.iter_mut().rev() {
        if nums[l].unsigned_abs() < nums[r - 1].unsigned_abs() {
            r -= 1;
            *slot = square(nums[r]);
        } else {
            *slot = square(nums[l]);
            l += 1;
        }
    }
    out
}

/// Square everything, then sort. O(N log N); any input order.
pub fn sorted_squares_brute(nums: &[i32]) -> Vec<i64> {
    let mut out: Vec<i64> = nums.iter().map(|&v| square(v)).collect();
    out.sort_unstable();
    out
}

fn square(v: i32) -> i64 {
    let v = i64::from(v);
    v * v
}
