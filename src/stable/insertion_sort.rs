use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;

sort_impl!("insertion_sort");

/// Sorts the slice in ascending order.
///
/// This sort is stable (i.e., does not reorder equal elements), *O*(*n*^2) worst-case and *O*(*n*)
/// if the slice is already sorted. It does not allocate.
///
/// # Examples
///
/// ```
/// let mut v = [5, 2, 8, 1, 9, 4, 3, 7, 6];
///
/// classic_sorts::insertion_sort::sort(&mut v);
/// assert!(v == [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    insertion_sort(arr, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified. If `compare` panics all
/// original elements remain in the slice, each exactly once.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // `v[..1]` is trivially sorted.
    for i in 1..v.len() {
        // SAFETY: `i >= 1` so the sub-slice holds at least two elements, and the loop keeps
        // `v[..i]` sorted.
        unsafe {
            insert_tail(&mut v[..=i], is_less);
        }
    }
}

/// Inserts `v[v.len() - 1]` into pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted.
///
/// SAFETY: `v.len()` must be at least 2.
unsafe fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    let arr = v.as_mut_ptr();
    let i = v.len() - 1;

    let key = arr.add(i);
    let mut prev = key.sub(1);

    // Already in place, the common case for nearly sorted input.
    if !is_less(&*key, &*prev) {
        return;
    }

    // Take the key out and move the gap left until an element `<= key` is found.
    //
    // Intermediate state of the insertion process is always tracked by `hole`, which
    // serves two purposes:
    // 1. Protects integrity of `v` from panics in `is_less`.
    // 2. Fills the remaining hole in `v` in the end.
    //
    // If `is_less` panics at any point during the process, `hole` will get dropped and
    // fill the hole in `v` with `tmp`, thus ensuring that `v` still holds every object it
    // initially held exactly once.
    let tmp = ManuallyDrop::new(ptr::read(key));
    let mut hole = InsertionHole {
        src: &*tmp,
        dest: prev,
    };
    ptr::copy_nonoverlapping(prev, key, 1);

    for j in (0..i - 1).rev() {
        prev = arr.add(j);
        if !is_less(&*tmp, &*prev) {
            break;
        }

        ptr::copy_nonoverlapping(prev, hole.dest, 1);
        hole.dest = prev;
    }
    // `hole` gets dropped and thus copies `tmp` into the remaining hole in `v`.
}

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points to the held key and `dest` to the single vacated slot in `v`.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}
