pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, miri_yes, $test_fn_name:ident) => {
        $crate::paste::paste! {
            #[test]
            fn [<sort_ $test_fn_name>]() {
                $crate::tests::$test_fn_name::<$sort_impl>();
            }
        }
    };
    ($sort_impl:ty, miri_no, $test_fn_name:ident) => {
        $crate::paste::paste! {
            #[test]
            #[cfg_attr(miri, ignore)]
            fn [<sort_ $test_fn_name>]() {
                $crate::tests::$test_fn_name::<$sort_impl>();
            }
        }
    };
}

/// Stamps out one `#[test]` per shared test body for `$sort_impl`.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, miri_yes, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_yes, fixed_scenarios);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, random);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, random_d4);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, random_d256);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, random_binary);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, random_z1);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, random_neg);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, random_str);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, all_equal);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, ascending);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, descending);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, saw_mixed);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, pipe_organ);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, idempotent);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, sort_by_reversed);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_yes, panic_retain_original_set);
    };
}

/// Like [`instantiate_sort_tests!`], plus the checks that only hold for stable sorts.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!($sort_impl);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_no, stability);
        $crate::instantiate_sort_test_inner!($sort_impl, miri_yes, stability_str);
    };
}
