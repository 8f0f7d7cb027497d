use std::cmp::Ordering;

use crate::SortError;

/// Searches the sorted slice `v` for `target`.
///
/// Returns `Some(index)` of an element equal to `target`, or `None` if there is no such element.
/// If there are several matches any one of them may be returned.
///
/// `v` must be sorted in ascending order, for example by any sort in this crate. This is not
/// checked. For unsorted input the result is unspecified, it may miss an element that is present,
/// but the call still terminates and never indexes out of bounds.
///
/// *O*(log(*n*)) comparisons, no allocation.
///
/// # Examples
///
/// ```
/// let v = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];
///
/// assert_eq!(classic_sorts::binary_search::search(&v, &23), Some(5));
/// assert_eq!(classic_sorts::binary_search::search(&v, &7), None);
/// ```
#[inline]
pub fn search<T>(v: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    search_by(v, |elem| elem.cmp(target))
}

/// Searches the sorted slice `v` with a comparator function.
///
/// `f` returns whether its argument is `Less`, `Equal` or `Greater` than the desired target, and
/// must be consistent with the order of `v`.
pub fn search_by<'a, T, F>(v: &'a [T], mut f: F) -> Option<usize>
where
    F: FnMut(&'a T) -> Ordering,
{
    // Half-open `low..high`, so shrinking the interval never computes `mid - 1` at `mid == 0`.
    let mut low = 0;
    let mut high = v.len();

    while low < high {
        // Written this way so `low + high` can't overflow.
        let mid = low + (high - low) / 2;

        match f(&v[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// Like [`search`], but rejects absent input with [`SortError::MissingInput`].
pub fn try_search<T>(v: Option<&[T]>, target: &T) -> Result<Option<usize>, SortError>
where
    T: Ord,
{
    crate::checked::require(v, "binary_search").map(|v| search(v, target))
}
