use std::cmp::Ordering;

sort_impl!("bubble_sort");

/// Sorts the slice in ascending order.
///
/// This sort is stable (i.e., does not reorder equal elements), *O*(*n*^2) worst-case and *O*(*n*)
/// if the slice is already sorted. It does not allocate.
///
/// # Examples
///
/// ```
/// let mut v = [64, 34, 25, 12, 22, 11, 90];
///
/// classic_sorts::bubble_sort::sort(&mut v);
/// assert!(v == [11, 12, 22, 25, 34, 64, 90]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    bubble_sort(arr, &mut |a, b| a.lt(b));
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
    bubble_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // After pass `i` the `i + 1` largest elements are in their final position at the end.
    for i in 0..len - 1 {
        let mut swapped = false;

        for j in 0..len - 1 - i {
            // Only swap strictly out of order pairs, equal neighbours keep their order.
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
