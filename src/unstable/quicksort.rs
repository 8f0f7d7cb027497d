use std::cmp::Ordering;

use crate::SortError;

sort_impl!("quicksort_lomuto");

// Pick a median of 3 pivot if at or above this threshold, below it the last element is used.
const MEDIAN3_THRESHOLD: usize = 8;

/// Sorts the slice in ascending order.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// classic_sorts::quick_sort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    quicksort(arr, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but all original elements
/// remain in the slice.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive range `v[low..=high]`, leaving the rest of `v` untouched.
///
/// Returns [`SortError::RangeOutOfBounds`] if `low` or `high` is not a valid index into `v`, so
/// any range on an empty slice is rejected. A valid `low >= high` describes a range of at most one
/// element and is a no-op.
///
/// ```
/// let mut v = [9, 4, 3, 2, 1, 0];
///
/// classic_sorts::quick_sort::sort_range(&mut v, 1, 4).unwrap();
/// assert!(v == [9, 1, 2, 3, 4, 0]);
/// ```
pub fn sort_range<T: Ord>(v: &mut [T], low: usize, high: usize) -> Result<(), SortError> {
    let len = v.len();
    if low >= len || high >= len {
        return Err(SortError::RangeOutOfBounds { low, high, len });
    }

    if low >= high {
        return Ok(());
    }

    sort(&mut v[low..=high]);
    Ok(())
}

/// Sorts `v` recursively.
///
/// Only the shorter side of each partition is sorted recursively, the longer side is handled by
/// the loop. This bounds the stack depth to *O*(log(*n*)) even for worst-case inputs.
fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let pivot_pos = choose_pivot(v, is_less);
        let num_lt = partition(v, pivot_pos, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(num_lt);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Takes the input slice `v` and re-arranges elements such that when the call returns normally
/// all elements that compare true for `is_less(elem, pivot)` where `pivot == v[pivot_pos]` are
/// on the left side of `v`, followed by the pivot, followed by the other elements.
///
/// Returns the final position of the pivot, which is also the number of elements that compared
/// true for `is_less(elem, pivot)`.
fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(pivot_pos < len);

    // Lomuto scheme, the pivot lives in the last slot while scanning.
    let last = len - 1;
    v.swap(pivot_pos, last);

    let (rest, pivot) = v.split_at_mut(last);
    let pivot = &pivot[0];

    // `rest[..store]` holds the elements less than the pivot.
    let mut store = 0;
    for i in 0..rest.len() {
        if is_less(&rest[i], pivot) {
            rest.swap(store, i);
            store += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(store, last);

    store
}

/// Selects a pivot from `v`. Uses median of 3 of the first, middle and last element, which avoids
/// the quadratic case for already sorted and reverse sorted input.
fn choose_pivot<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < MEDIAN3_THRESHOLD {
        return len - 1;
    }

    median3(v, 0, len / 2, len - 1, is_less)
}

/// Returns the index of the median of `v[a]`, `v[b]` and `v[c]`.
fn median3<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Compiler tends to make this branchless when sensible, and avoids the
    // third comparison when not.
    let x = is_less(&v[a], &v[b]);
    let y = is_less(&v[a], &v[c]);
    if x == y {
        // If x=y=0 then b, c <= a. In this case we want to return max(b, c).
        // If x=y=1 then a < b, c. In this case we want to return min(b, c).
        // By toggling the outcome of b < c using XOR x we get this behavior.
        let z = is_less(&v[b], &v[c]);
        if z ^ x {
            c
        } else {
            b
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        a
    }
}
