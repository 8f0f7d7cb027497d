use std::cmp::Ordering;
use std::mem::size_of;
use std::ptr;

sort_impl!("merge_sort");

/// Sorts the slice in ascending order.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) in all
/// cases.
///
/// # Current implementation
///
/// Top-down merge sort. The slice is split at its midpoint, both halves are sorted recursively and
/// then merged. It allocates temporary storage the size of `self` once per call, short slices of
/// less than two elements return without allocating.
///
/// # Examples
///
/// ```
/// let mut v = [12, 11, 13, 5, 6, 7, 2, 19, 4];
///
/// classic_sorts::merge_sort::sort(&mut v);
/// assert!(v == [2, 4, 5, 6, 7, 11, 12, 13, 19]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    merge_sort(arr, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) in all
/// cases.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified. If `compare` panics all
/// original elements remain in the slice, each exactly once.
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
///
/// // reverse sorting
/// classic_sorts::merge_sort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Allocate a buffer to use as scratch memory. We keep the length 0 so we can keep in it
    // shallow copies of the contents of `v` without risking the dtors running on copies if
    // `is_less` panics. Every merge snapshots its whole range, so the buffer needs `len` slots.
    let mut buf = Vec::<T>::with_capacity(len);

    // SAFETY: `buf` has capacity for `len` elements and is a fresh allocation, it can't alias `v`.
    unsafe {
        merge_sort_range(v, 0, len - 1, buf.as_mut_ptr(), is_less);
    }
}

/// Sorts the inclusive range `v[left..=right]`.
///
/// SAFETY: `buf` must be valid for writes of `right - left + 1` elements and must not alias `v`.
unsafe fn merge_sort_range<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    buf: *mut T,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    // Ranges of zero or one element are sorted.
    if left >= right {
        return;
    }

    debug_assert!(right < v.len());

    // Written this way so `left + right` can't overflow.
    let mid = left + (right - left) / 2;

    merge_sort_range(v, left, mid, buf, is_less);
    merge_sort_range(v, mid + 1, right, buf, is_less);

    merge(&mut v[left..=right], mid - left + 1, buf, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// SAFETY: `buf` must be valid for writes of `v.len()` elements and must not alias `v`. `mid` must
/// be in `1..v.len()`.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let v = v.as_mut_ptr();

    // Snapshot the whole range. Writing into `v` overwrites positions of both runs while they are
    // still being read, so both runs are read from `buf` only.
    ptr::copy_nonoverlapping(v, buf, len);

    // Intermediate state of the merge is always tracked by `hole`, which serves two purposes:
    // 1. Protects integrity of `v` from panics in `is_less`.
    // 2. Copies the unconsumed remainder of both runs into `v` in the end.
    //
    // If `is_less` panics at any point during the process, `hole` will get dropped and fill the
    // hole in `v` with the unconsumed ranges in `buf`, thus ensuring that `v` still holds every
    // object it initially held exactly once.
    let mut hole = MergeHole {
        left: buf,
        left_end: buf.add(mid),
        right: buf.add(mid),
        right_end: buf.add(len),
        dest: v,
    };

    while hole.left < hole.left_end && hole.right < hole.right_end {
        // Consume the lesser side.
        // If equal, prefer the left run to maintain stability.
        let take_right = is_less(&*hole.right, &*hole.left);

        let to_copy = if take_right { hole.right } else { hole.left };
        ptr::copy_nonoverlapping(to_copy, hole.dest, 1);
        hole.dest = hole.dest.add(1);

        if take_right {
            hole.right = hole.right.add(1);
        } else {
            hole.left = hole.left.add(1);
        }
    }
    // Finally, `hole` gets dropped. Whatever remains of either run is copied into `v`, the left
    // remainder first, so both runs are handled the same way whichever one ran out.
}

// When dropped, copies `left..left_end` and then `right..right_end` into `dest..`.
struct MergeHole<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, all pointers point into `buf` and `v` respectively,
        // and `dest` has exactly `left_len + right_len` slots left before the end of the range.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);

            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}
