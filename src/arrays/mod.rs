pub mod sorted_squares;
pub mod unsorted_subarray;
