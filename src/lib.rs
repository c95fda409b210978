//! # Two Pointers
//!
//! Array and string algorithms built on converging or trailing index pairs.
//!
//! ## Modules
//!
//! - `k_sum` – Sorted two-pointer k-sum family (3-sum, 3-sum-closest, 4-sum)
//! - `partitioning` – In-place segregation (0s/1s, Dutch national flag)
//! - `arrays` – Sorted squares, shortest unsorted subarray
//! - `sliding_window` – Subarray products below a bound
//! - `string_algorithms` – Backspace string compare
//! - `computation_map` – Module → computation type table
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use two_pointers::k_sum::three_sum::three_sum;
//!
//! let triples = three_sum(&[-1, 0, 1, 2, -1, -4]);
//! assert_eq!(triples, vec![[-1, -1, 2], [-1, 0, 1]]);
//! ```

pub mod arrays;
pub mod computation_map;
pub mod error;
pub mod k_sum;
pub mod partitioning;
pub mod sliding_window;
pub mod string_algorithms;

pub use error::{Result, TwoPointerError};
