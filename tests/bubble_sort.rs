use classic_sorts::bubble_sort;
use sort_test_tools::{instantiate_stable_sort_tests, patterns};

type TestSort = bubble_sort::SortImpl;

instantiate_stable_sort_tests!(TestSort);

fn count_comparisons(v: &mut [i32]) -> usize {
    let mut count = 0;
    bubble_sort::sort_by(v, |a, b| {
        count += 1;
        a.cmp(b)
    });
    count
}

#[test]
fn sorted_input_stops_after_one_pass() {
    for len in [2, 3, 10, 100, 1000] {
        let mut v = patterns::ascending(len);
        assert_eq!(count_comparisons(&mut v), len - 1);
        assert_eq!(v, patterns::ascending(len));
    }
}

#[test]
fn all_equal_stops_after_one_pass() {
    let mut v = patterns::all_equal(50);
    assert_eq!(count_comparisons(&mut v), 49);
}

#[test]
fn reverse_sorted_needs_every_pass() {
    let len = 20;
    let mut v = patterns::descending(len);
    assert_eq!(count_comparisons(&mut v), len * (len - 1) / 2);
    assert_eq!(v, patterns::ascending(len));
}

#[test]
fn degenerate_inputs_do_not_compare() {
    assert_eq!(count_comparisons(&mut []), 0);
    assert_eq!(count_comparisons(&mut [5]), 0);
}

#[test]
fn duplicates() {
    let mut v = [5, 2, 5, 1, 2];
    bubble_sort::sort(&mut v);
    assert_eq!(v, [1, 2, 2, 5, 5]);
}
