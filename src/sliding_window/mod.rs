pub mod subarray_product;
