// Iterative binary search over a sorted slice.
pub mod binary_search;
