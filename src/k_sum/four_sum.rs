use std::cmp::Ordering;

use tracing::{debug, trace};

use super::{sorted_copy, Quad};

/// Every unique quadruple summing to `target`, each in non-decreasing order.
///
/// Sums are accumulated in `i64`, so four `i32` values never overflow.
pub fn four_sum(nums: &[i32], target: i64) -> Vec<Quad> {
    let s = sorted_copy(nums);
    let n = s.len();
    let mut res = Vec::new();

    for i in 0..n {
        if i > 0 && s[i] == s[i - 1] {
            continue;
        }
        for j in i + 1..n {
            // compare against the previous j, never against the anchor i
            if j > i + 1 && s[j] == s[j - 1] {
                continue;
            }
            let (mut k, mut l) = (j + 1, n - 1);
            while k < l {
                let sum = i64::from(s[i]) + i64::from(s[j]) + i64::from(s[k]) + i64::from(s[l]);
                match sum.cmp(&target) {
                    Ordering::Less => k += 1,
                    Ordering::Greater => l -= 1,
                    Ordering::Equal => {
                        trace!(a = s[i], b = s[j], c = s[k], d = s[l], "quad");
                        res.push([s[i], s[j], s[k], s[l]]);
                        k += 1;
                        l -= 1;
                        while k < l && s[k] == s[k - 1] {
                            k += 1;
                        }
                        while k < l && s[l] == s[l + 1] {
                            l -= 1;
                        }
                    }
                }
            }
        }
    }

    debug!(len = n, target, quads = res.len(), "four_sum");
    res
}
