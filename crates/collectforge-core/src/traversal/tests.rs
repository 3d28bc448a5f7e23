//! Tests for the single-pass traversal.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet, HashSet, LinkedList};

use super::*;
use crate::multimap::ListMultimap;

fn both_traversals() -> [PassOptions; 2] {
    [
        PassOptions::new(),
        PassOptions::new().with_traversal(Traversal::Sequential),
    ]
}

#[test]
fn test_transform_keeps_order_on_both_paths() {
    for options in both_traversals() {
        let result = transform(&vec![1, 2, 3, 4], |n| n.to_string(), Vec::new(), options);
        assert_eq!(result, vec!["1", "2", "3", "4"]);
    }
}

#[test]
fn test_filter_excludes_rejected() {
    let result = filter(&[1, 2, 3, 4], |n| *n != 2, Vec::new(), PassOptions::new());
    assert_eq!(result, vec![1, 3, 4]);
}

#[test]
fn test_filter_transform_never_maps_rejected() {
    let source = vec![Some(1), None, Some(2), Some(3), Some(4)];
    let result = filter_transform(
        &source,
        Option::is_some,
        |n| n.expect("filtered").to_string(),
        Vec::new(),
        PassOptions::new(),
    );
    assert_eq!(result, vec!["1", "2", "3", "4"]);
}

#[test]
fn test_predicate_and_function_call_counts() {
    let predicate_calls = Cell::new(0);
    let function_calls = Cell::new(0);

    let result = filter_transform(
        &vec![1, 2, 3, 4, 5],
        |n| {
            predicate_calls.set(predicate_calls.get() + 1);
            n % 2 == 1
        },
        |n| {
            function_calls.set(function_calls.get() + 1);
            n * 10
        },
        Vec::new(),
        PassOptions::new(),
    );

    assert_eq!(result, vec![10, 30, 50]);
    assert_eq!(predicate_calls.get(), 5);
    assert_eq!(function_calls.get(), 3);
}

#[test]
fn test_sequential_source_ignores_traversal_choice() {
    let source: LinkedList<i32> = [3, 1, 2].into_iter().collect();
    for options in both_traversals() {
        let result = transform(&source, |n| n * 2, Vec::new(), options);
        assert_eq!(result, vec![6, 2, 4]);
    }
}

#[test]
fn test_index_last_write_wins() {
    let result = index(
        &vec!["apple", "avocado", "banana"],
        |word| word.chars().next(),
        BTreeMap::new(),
        PassOptions::new(),
    );
    assert_eq!(result.get(&Some('a')), Some(&"avocado"));
    assert_eq!(result.len(), 2);
}

#[test]
fn test_index_with_sorted_keys() {
    let result = index_with(
        &vec![4, 1, 3, 2],
        |n| n.to_string(),
        |n| n * n,
        BTreeMap::new(),
        PassOptions::new(),
    );
    let keys: Vec<&str> = result.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["1", "2", "3", "4"]);
    assert_eq!(result["3"], 9);
}

#[test]
fn test_filter_index_into_multimap_appends() {
    let result = filter_index(
        &vec![1, 2, 3, 4, 5, 6],
        |n| *n != 6,
        |n| n % 2,
        ListMultimap::new(),
        PassOptions::new(),
    );
    assert_eq!(result.get(&1), Some(&vec![1, 3, 5]));
    assert_eq!(result.get(&0), Some(&vec![2, 4]));
}

#[test]
fn test_filter_index_with_values() {
    let result = filter_index_with(
        &["a", "bb", "cc", "ddd"],
        |word| word.len() > 1,
        |word| word.len(),
        |word| word.to_uppercase(),
        ListMultimap::new(),
        PassOptions::new(),
    );
    assert_eq!(
        result.get(&2),
        Some(&vec!["BB".to_string(), "CC".to_string()])
    );
    assert_eq!(result.len(), 3);
}

#[test]
fn test_set_targets_dedup() {
    let hashed = transform(&vec![1, 2, 3, 4], |n| n % 2, HashSet::new(), PassOptions::new());
    let sorted = transform(&vec![1, 2, 3, 4], |n| n % 2, BTreeSet::new(), PassOptions::new());
    assert_eq!(hashed.len(), 2);
    assert_eq!(sorted.into_iter().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn test_empty_source_yields_empty_target() {
    let source: Vec<i32> = Vec::new();
    let result: Vec<i32> = transform(&source, |n| *n, Vec::new(), PassOptions::new());
    assert!(result.is_empty());
}

#[test]
fn test_reserve_can_be_disabled() {
    let options = PassOptions::new().with_reserve_capacity(false);
    let result: Vec<i32> = transform(&vec![1, 2], |n| *n, Vec::new(), options);
    assert_eq!(result, vec![1, 2]);
    assert!(!options.reserve_capacity);
    assert_eq!(options.traversal, Traversal::Auto);
}

#[test]
fn test_visit_sees_each_element_once() {
    let mut seen = Vec::new();
    visit(&[5, 6, 7], Traversal::Sequential, |n| seen.push(*n));
    visit(&[5, 6, 7], Traversal::Auto, |n| seen.push(*n));
    assert_eq!(seen, vec![5, 6, 7, 5, 6, 7]);
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn indexed_and_sequential_agree(source in prop::collection::vec(any::<i16>(), 0..64)) {
            let indexed = transform(&source, |n| i32::from(*n) * 3, Vec::new(), PassOptions::new());
            let sequential = transform(
                &source,
                |n| i32::from(*n) * 3,
                Vec::new(),
                PassOptions::new().with_traversal(Traversal::Sequential),
            );
            prop_assert_eq!(indexed, sequential);
        }

        #[test]
        fn filtering_is_idempotent(source in prop::collection::vec(any::<i16>(), 0..64)) {
            let once = filter(&source, |n| n % 3 != 0, Vec::new(), PassOptions::new());
            let twice = filter(&once, |n| n % 3 != 0, Vec::new(), PassOptions::new());
            prop_assert!(once.iter().all(|n| n % 3 != 0));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn filter_keeps_relative_order(source in prop::collection::vec(any::<u8>(), 0..64)) {
            let result = filter(&source, |n| n % 2 == 0, Vec::new(), PassOptions::new());
            let expected: Vec<u8> = source.iter().copied().filter(|n| n % 2 == 0).collect();
            prop_assert_eq!(result, expected);
        }
    }
}
