// Lomuto partition quicksort, median of 3 pivot.
pub mod quicksort;
