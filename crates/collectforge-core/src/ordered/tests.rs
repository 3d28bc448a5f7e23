//! Tests for comparator-ordered containers.

use super::*;

fn by_length(a: &&str, b: &&str) -> Ordering {
    a.len().cmp(&b.len())
}

#[test]
fn test_set_orders_by_comparator() {
    let mut set = OrderedSet::new(|a: &i32, b: &i32| b.cmp(a));
    for n in [2, 9, 4, 1] {
        set.insert(n);
    }
    assert_eq!(set.as_slice(), &[9, 4, 2, 1]);
    assert_eq!(set.first(), Some(&9));
    assert_eq!(set.last(), Some(&1));
}

#[test]
fn test_set_keeps_first_of_ties() {
    let mut set = OrderedSet::new(by_length);
    assert!(set.insert("aa"));
    assert!(set.insert("b"));
    assert!(!set.insert("cc"));

    assert_eq!(set.len(), 2);
    assert_eq!(set.get(&"zz"), Some(&"aa"));
    assert!(set.contains(&"q"));
    assert!(!set.contains(&"qqq"));
}

#[test]
fn test_set_iteration_matches_into_iter() {
    let mut set = OrderedSet::with_capacity(3, |a: &char, b: &char| a.cmp(b));
    set.put('c');
    set.put('a');
    set.put('b');

    let borrowed: Vec<char> = set.iter().copied().collect();
    let owned: Vec<char> = set.clone().into_iter().collect();
    assert_eq!(borrowed, owned);
    assert_eq!(format!("{:?}", set), "{'a', 'b', 'c'}");
}

#[test]
fn test_map_orders_keys_by_comparator() {
    let mut map = OrderedMap::new(|a: &i32, b: &i32| b.cmp(a));
    map.insert(1, "one");
    map.insert(3, "three");
    map.insert(2, "two");

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(
        map.values().copied().collect::<Vec<_>>(),
        vec!["three", "two", "one"]
    );
    assert_eq!(map.first(), Some((&3, &"three")));
    assert_eq!(map.last(), Some((&1, &"one")));
}

#[test]
fn test_map_tie_keeps_key_and_replaces_value() {
    let mut map = OrderedMap::new(by_length);
    assert_eq!(map.insert("ab", 1), None);
    assert_eq!(map.insert("cd", 2), Some(1));

    assert_eq!(map.len(), 1);
    assert_eq!(map.into_vec(), vec![("ab", 2)]);
}

#[test]
fn test_map_sink_overwrites() {
    let mut map = OrderedMap::new(|a: &String, b: &String| a.cmp(b));
    map.put(("k".to_string(), 1));
    map.put(("k".to_string(), 2));

    assert_eq!(map.get(&"k".to_string()), Some(&2));
    assert!(map.contains_key(&"k".to_string()));
    assert!(!map.is_empty());
}

#[test]
fn test_set_from_unsorted_sorts_and_keeps_first_of_ties() {
    let set = OrderedSet::from_unsorted(vec!["ccc", "bb", "a", "dd", "e", "fff"], by_length);

    assert_eq!(set.as_slice(), &["a", "bb", "ccc"]);
}

#[test]
fn test_set_extend_keeps_existing_elements_on_ties() {
    let mut set = OrderedSet::new(by_length);
    set.insert("bb");
    set.extend(["x", "yy", "zzz", "w"]);

    assert_eq!(set.as_slice(), &["x", "bb", "zzz"]);
}

#[test]
fn test_map_from_unsorted_keeps_first_key_and_last_value() {
    let map = OrderedMap::from_unsorted(
        vec![("bb", 1), ("a", 2), ("cc", 3), ("d", 4), ("ee", 5)],
        by_length,
    );

    assert_eq!(map.into_vec(), vec![("a", 4), ("bb", 5)]);
}

#[test]
fn test_map_extend_replaces_value_and_keeps_key() {
    let mut map = OrderedMap::new(by_length);
    map.insert("ab", 1);
    map.extend([("cd", 2), ("e", 3)]);

    assert_eq!(map.into_vec(), vec![("e", 3), ("ab", 2)]);
}

#[test]
fn test_from_unsorted_empty() {
    let set = OrderedSet::from_unsorted(Vec::new(), |a: &i32, b: &i32| a.cmp(b));
    let map = OrderedMap::from_unsorted(Vec::<(i32, i32)>::new(), |a: &i32, b: &i32| a.cmp(b));

    assert!(set.is_empty());
    assert!(map.is_empty());
}
