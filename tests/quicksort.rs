use classic_sorts::{quick_sort, SortError};
use sort_test_tools::{instantiate_sort_tests, patterns};

type TestSort = quick_sort::SortImpl;

instantiate_sort_tests!(TestSort);

#[test]
fn sort_range_leaves_outside_untouched() {
    let mut v = [9, 4, 3, 2, 1, 0];
    quick_sort::sort_range(&mut v, 1, 4).unwrap();
    assert_eq!(v, [9, 1, 2, 3, 4, 0]);
}

#[test]
fn sort_range_whole_slice() {
    let mut v = patterns::random(100);
    let len = v.len();

    let mut expected = v.clone();
    expected.sort();

    quick_sort::sort_range(&mut v, 0, len - 1).unwrap();
    assert_eq!(v, expected);
}

#[test]
fn sort_range_single_element_is_noop() {
    let mut v = [3, 2, 1];
    quick_sort::sort_range(&mut v, 1, 1).unwrap();
    assert_eq!(v, [3, 2, 1]);

    // `low > high` is an empty range.
    quick_sort::sort_range(&mut v, 2, 0).unwrap();
    assert_eq!(v, [3, 2, 1]);
}

#[test]
fn sort_range_out_of_bounds() {
    let mut v = [3, 2, 1];
    assert_eq!(
        quick_sort::sort_range(&mut v, 0, 3),
        Err(SortError::RangeOutOfBounds {
            low: 0,
            high: 3,
            len: 3
        })
    );
    assert_eq!(v, [3, 2, 1]);
}

#[test]
fn sort_range_checks_bounds_before_empty_ranges() {
    let mut v = [3, 2, 1];
    let len = v.len();

    for (low, high) in [(len + 4, len + 4), (9, 5), (7, 1), (1, 3)] {
        assert_eq!(
            quick_sort::sort_range(&mut v, low, high),
            Err(SortError::RangeOutOfBounds { low, high, len }),
            "low: {low}, high: {high}"
        );
    }
    assert_eq!(v, [3, 2, 1]);

    let mut empty: [i32; 0] = [];
    assert_eq!(
        quick_sort::sort_range(&mut empty, 0, 0),
        Err(SortError::RangeOutOfBounds {
            low: 0,
            high: 0,
            len: 0
        })
    );
}

#[test]
fn deep_inputs_do_not_overflow_the_stack() {
    // Sorted, reverse sorted and all equal inputs are the classic worst cases for a last element
    // Lomuto pivot.
    for mut v in [
        patterns::ascending(20_000),
        patterns::descending(20_000),
        patterns::all_equal(5_000),
    ] {
        let mut expected = v.clone();
        expected.sort();

        quick_sort::sort(&mut v);
        assert_eq!(v, expected);
    }
}
