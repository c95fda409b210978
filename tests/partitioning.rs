use proptest::prelude::*;
use two_pointers::partitioning::segregate::segregate_zeros_ones;
use two_pointers::partitioning::sort_colors::sort_colors;
use two_pointers::TwoPointerError;

#[test]
fn segregates_mixed_bits() {
    let mut arr = [0, 1, 1, 0, 1, 0, 0, 1];
    segregate_zeros_ones(&mut arr).expect("binary input");
    assert_eq!(arr, [0, 0, 0, 0, 1, 1, 1, 1]);
}

#[test]
fn segregate_handles_trivial_inputs() {
    let mut empty: [u8; 0] = [];
    segregate_zeros_ones(&mut empty).expect("empty input");
    let mut one = [1];
    segregate_zeros_ones(&mut one).expect("single element");
    assert_eq!(one, [1]);
    let mut reversed = [1, 1, 0, 0];
    segregate_zeros_ones(&mut reversed).expect("binary input");
    assert_eq!(reversed, [0, 0, 1, 1]);
}

#[test]
fn segregate_rejects_non_binary_without_mutation() {
    let mut arr = [1, 0, 2, 0];
    let err = segregate_zeros_ones(&mut arr).expect_err("2 is not a bit");
    assert_eq!(err, TwoPointerError::InvalidValue { index: 2, value: 2, allowed: "0 or 1" });
    assert_eq!(arr, [1, 0, 2, 0]);
}

#[test]
fn sorts_colors() {
    let mut arr = [2, 0, 2, 1, 1, 0];
    sort_colors(&mut arr).expect("colour input");
    assert_eq!(arr, [0, 0, 1, 1, 2, 2]);

    let mut arr = [2, 0, 1];
    sort_colors(&mut arr).expect("colour input");
    assert_eq!(arr, [0, 1, 2]);
}

#[test]
fn sort_colors_rejects_unknown_colour() {
    let mut arr = [0, 3, 1];
    let err = sort_colors(&mut arr).expect_err("3 is not a colour");
    assert!(matches!(err, TwoPointerError::InvalidValue { index: 1, value: 3, .. }));
    assert_eq!(arr, [0, 3, 1]);
}

proptest! {
    #[test]
    fn segregate_matches_sort(mut arr in prop::collection::vec(0u8..2, 0..40)) {
        let mut expected = arr.clone();
        expected.sort_unstable();
        segregate_zeros_ones(&mut arr).expect("binary input");
        prop_assert_eq!(arr, expected);
    }

    #[test]
    fn sort_colors_matches_sort(mut arr in prop::collection::vec(0u8..3, 0..40)) {
        let mut expected = arr.clone();
        expected.sort_unstable();
        sort_colors(&mut arr).expect("colour input");
        prop_assert_eq!(arr, expected);
    }
}
