use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::{sorted_copy, Triple};

/// Every unique triple summing to zero, each in non-decreasing order, in
/// discovery order. Fewer than three elements yields an empty result.
pub fn three_sum(nums: &[i32]) -> Vec<Triple> {
    let s = sorted_copy(nums);
    let n = s.len();
    let mut res = Vec::new();

    for i in 0..n {
        if i > 0 && s[i] == s[i - 1] {
            continue;
        }
        let (mut j, mut k) = (i + 1, n - 1);
        while j < k {
            let sum = i64::from(s[i]) + i64::from(s[j]) + i64::from(s[k]);
            if sum < 0 {
                j += 1;
            } else if sum > 0 {
                k -= 1;
            } else {
                trace!(a = s[i], b = s[j], c = s[k], "triple");
                res.push([s[i], s[j], s[k]]);
                j += 1;
                k -= 1;
                while j < k && s[j] == s[j - 1] {
                    j += 1;
                }
                while j < k && s[k] == s[k + 1] {
                    k -= 1;
                }
            }
        }
    }

    debug!(len = n, triples = res.len(), "three_sum");
    res
}

/// O(n³) enumeration of every index triple. Output is sorted and deduplicated.
pub fn three_sum_brute(nums: &[i32]) -> Vec<Triple> {
    let n = nums.len();
    let mut seen = BTreeSet::new();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                if i64::from(nums[i]) + i64::from(nums[j]) + i64::from(nums[k]) == 0 {
                    let mut t = [nums[i], nums[j], nums[k]];
                    t.sort_unstable();
                    seen.insert(t);
                }
            }
        }
    }
    seen.into_iter().collect()
}
