/// Mapping of modules in src to type of computation
/// and whether deterministic or stochastic
pub const ALGORITHMS_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // k-sum
    ("k_sum/three_sum.rs", "Sorted two-pointer search", "Deterministic"),
    (
        "k_sum/three_sum_closest.rs",
        "Sorted two-pointer approximation",
        "Deterministic",
    ),
    ("k_sum/four_sum.rs", "Sorted two-pointer search", "Deterministic"),
    // Partitioning
    ("partitioning/segregate.rs", "In-place partition", "Deterministic"),
    ("partitioning/sort_colors.rs", "In-place partition", "Deterministic"),
    // Arrays
    ("arrays/sorted_squares.rs", "Merge from both ends", "Deterministic"),
    (
        "arrays/unsorted_subarray.rs",
        "Boundary scan",
        "Deterministic",
    ),
    // Sliding window
    (
        "sliding_window/subarray_product.rs",
        "Sliding window count",
        "Deterministic",
    ),
    // Strings
    (
        "string_algorithms/backspace_compare.rs",
        "Reverse string scan",
        "Deterministic",
    ),
];
