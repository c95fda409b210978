use proptest::prelude::*;
use two_pointers::sliding_window::subarray_product::num_subarray_product_less_than_k;
use two_pointers::TwoPointerError;

fn count_by_enumeration(nums: &[u32], k: u64) -> u64 {
    let mut count = 0;
    for start in 0..nums.len() {
        let mut prod: u128 = 1;
        for &v in &nums[start..] {
            prod *= u128::from(v);
            if prod >= u128::from(k) {
                break;
            }
            count += 1;
        }
    }
    count
}

#[test]
fn counts_subarrays_below_bound() {
    assert_eq!(num_subarray_product_less_than_k(&[10, 5, 2, 6], 100), Ok(8));
    assert_eq!(num_subarray_product_less_than_k(&[1, 2, 3], 0), Ok(0));
    assert_eq!(num_subarray_product_less_than_k(&[1, 1, 1], 1), Ok(0));
    assert_eq!(num_subarray_product_less_than_k(&[], 10), Ok(0));
}

#[test]
fn large_products_do_not_overflow() {
    let nums = [u32::MAX; 6];
    // every pair of u32::MAX stays below u64::MAX, every triple does not
    assert_eq!(num_subarray_product_less_than_k(&nums, u64::MAX), Ok(11));
}

#[test]
fn zero_element_is_rejected() {
    assert_eq!(
        num_subarray_product_less_than_k(&[3, 0, 2], 10),
        Err(TwoPointerError::ZeroElement { index: 1 })
    );
}

proptest! {
    #[test]
    fn window_matches_enumeration(nums in prop::collection::vec(1u32..12, 0..25), k in 0u64..300) {
        prop_assert_eq!(num_subarray_product_less_than_k(&nums, k), Ok(count_by_enumeration(&nums, k)));
    }
}
