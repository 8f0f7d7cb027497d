use std::cmp::Ordering;

use classic_sorts::{binary_search, merge_sort};
use rand::prelude::*;
use sort_test_tools::patterns;

#[test]
fn empty() {
    let v: [i32; 0] = [];
    assert_eq!(binary_search::search(&v, &5), None);
}

#[test]
fn single_element() {
    assert_eq!(binary_search::search(&[42], &42), Some(0));
    assert_eq!(binary_search::search(&[42], &41), None);
    assert_eq!(binary_search::search(&[42], &43), None);
}

#[test]
fn found() {
    let v = [1, 5, 10, 25, 50];
    assert_eq!(binary_search::search(&v, &25), Some(3));
}

#[test]
fn not_found() {
    let v = [1, 5, 10, 25, 50];
    assert_eq!(binary_search::search(&v, &15), None);
    assert_eq!(binary_search::search(&v, &0), None);
    assert_eq!(binary_search::search(&v, &51), None);
}

#[test]
fn boundaries() {
    let v = [1, 5, 10, 25, 50];
    assert_eq!(binary_search::search(&v, &1), Some(0));
    assert_eq!(binary_search::search(&v, &50), Some(4));
}

#[test]
fn duplicates() {
    let v = [1, 5, 5, 10, 25, 25, 50];
    assert!(matches!(binary_search::search(&v, &25), Some(4 | 5)));
    assert!(matches!(binary_search::search(&v, &5), Some(1 | 2)));
}

#[test]
fn negative_values() {
    let v = [-8, -5, -5, -2, -2, -1];
    assert_eq!(binary_search::search(&v, &-8), Some(0));
    assert_eq!(binary_search::search(&v, &-1), Some(5));
    assert!(matches!(binary_search::search(&v, &-2), Some(3 | 4)));
    assert_eq!(binary_search::search(&v, &-3), None);
}

#[test]
fn extreme_values() {
    let v = [i32::MIN, -1, 0, 1, i32::MAX];
    assert_eq!(binary_search::search(&v, &i32::MIN), Some(0));
    assert_eq!(binary_search::search(&v, &i32::MAX), Some(4));
}

#[test]
fn every_element_is_found() {
    for len in [1, 2, 3, 10, 33, 100, 1000] {
        let mut v = patterns::random_uniform(len, 0..(len as i32 / 2 + 1));
        merge_sort::sort(&mut v);

        for target in &v {
            let index = binary_search::search(&v, target).expect("present value not found");
            assert_eq!(v[index], *target);
        }
    }
}

#[test]
fn absent_values_are_not_found() {
    let mut rng = StdRng::seed_from_u64(patterns::random_init_seed());

    // Only even values present, odd targets must all miss.
    let v: Vec<i32> = (0..500).map(|i| i * 2).collect();
    for _ in 0..1000 {
        let target = rng.gen_range(-10..1010) | 1;
        assert_eq!(binary_search::search(&v, &target), None, "target: {target}");
    }
}

#[test]
fn search_by_agrees_with_search() {
    let mut v = patterns::random_uniform(257, -100..100);
    merge_sort::sort(&mut v);

    for target in -110..110 {
        let by_ord = binary_search::search(&v, &target);
        let by_comparator = binary_search::search_by(&v, |elem| elem.cmp(&target));
        assert_eq!(by_ord, by_comparator);
    }
}

#[test]
fn search_by_key() {
    let v = [(1, "a"), (3, "b"), (7, "c"), (9, "d")];
    assert_eq!(
        binary_search::search_by(&v, |&(key, _)| key.cmp(&7)),
        Some(2)
    );
    assert_eq!(
        binary_search::search_by(&v, |&(key, _)| key.cmp(&4)),
        None
    );
}

#[test]
fn unsorted_input_terminates() {
    // Unspecified result, but it must return and any index must hold the target.
    let v = [9, 1, 8, 2, 7, 3];
    for target in 0..10 {
        if let Some(index) = binary_search::search(&v, &target) {
            assert_eq!(v[index], target);
        }
    }

    let always_less = binary_search::search_by(&v, |_| Ordering::Less);
    assert_eq!(always_less, None);
}
