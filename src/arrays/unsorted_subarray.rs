use tracing::debug;

/// Length of the shortest contiguous window which, once sorted, leaves the
/// whole array sorted. Already-sorted input (including `len <= 1`) gives 0.
pub fn find_unsorted_subarray(nums: &[i32]) -> usize {
    let Some(mut left) = nums.windows(2).position(|w| w[0] > w[1]) else {
        return 0;
    };
    let mut right = nums.windows(2).rposition(|w| w[0] > w[1]).map_or(left + 1, |p| p + 1);

    let (min, max) = nums[left..=right]
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    while left > 0 && nums[left - 1] > min {
        left -= 1;
    }
    while right + 1 < nums.len() && nums[right + 1] < max {
        right += 1;
    }

    debug!(left, right, "find_unsorted_subarray");
    right - left + 1
}
