// Adjacent swap passes with early exit once a pass performs no swaps.
pub mod bubble_sort;

// Sorted prefix grown one element at a time by shifting larger elements right.
pub mod insertion_sort;

// Top-down recursive merge sort with a full-capacity scratch buffer.
pub mod merge_sort;
