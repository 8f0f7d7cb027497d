//! Classic in-place sorts and a binary search over sorted slices.
//!
//! Every sort module exposes the same surface: `sort`, `sort_by`, a checked `try_sort` that
//! rejects absent input with [`SortError::MissingInput`], and a `SortImpl` type plugging the
//! module into `sort_test_tools`.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }

        /// Sorts `v` if it is present.
        ///
        /// Absent input is an error, never a silent no-op. Callers that want no-op semantics for
        /// `None` should check before calling.
        pub fn try_sort<T: Ord>(v: Option<&mut [T]>) -> Result<(), crate::SortError> {
            crate::checked::require_mut(v, $name).map(sort)
        }
    };
}

mod checked;
mod error;

pub mod search;
pub mod stable;
pub mod unstable;

pub use error::SortError;

pub use search::binary_search;
pub use stable::{bubble_sort, insertion_sort, merge_sort};
pub use unstable::quicksort as quick_sort;
