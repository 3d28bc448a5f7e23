//! Maps from a key to many values.
//!
//! A [`Multimap`] stores one bucket per key. Every value put under a key is
//! handed to that key's bucket, so the bucket type decides what "many" means:
//! a `Vec` keeps every value in arrival order, a `HashSet` or `BTreeSet`
//! collapses equal values.

use std::collections::hash_map::{self, HashMap};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::sink::Sink;

/// Multimap keeping every value per key, in insertion order.
pub type ListMultimap<K, V> = Multimap<K, Vec<V>>;

/// Multimap keeping distinct values per key.
pub type SetMultimap<K, V> = Multimap<K, HashSet<V>>;

/// Multimap keeping distinct values per key in natural order.
pub type SortedSetMultimap<K, V> = Multimap<K, BTreeSet<V>>;

/// A hash map from keys to value buckets.
///
/// # Example
///
/// ```
/// use collectforge_core::ListMultimap;
///
/// let mut multimap = ListMultimap::new();
/// multimap.put("even", 2);
/// multimap.put("odd", 1);
/// multimap.put("even", 4);
///
/// assert_eq!(multimap.get(&"even").map(Vec::as_slice), Some(&[2, 4][..]));
/// assert_eq!(multimap.key_count(), 2);
/// assert_eq!(multimap.len(), 3);
/// ```
#[derive(Clone)]
pub struct Multimap<K, B> {
    buckets: HashMap<K, B>,
    len: usize,
}

impl<K, B> Multimap<K, B> {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            len: 0,
        }
    }

    /// Returns the number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of values across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, B> {
        self.buckets.keys()
    }

    /// Iterates `(key, bucket)` pairs in unspecified order.
    pub fn buckets(&self) -> hash_map::Iter<'_, K, B> {
        self.buckets.iter()
    }

    /// Consumes the multimap, returning the underlying bucket map.
    pub fn into_inner(self) -> HashMap<K, B> {
        self.buckets
    }
}

impl<K: Eq + Hash, B> Multimap<K, B> {
    /// Returns the bucket for `key`, if any value was put under it.
    pub fn get(&self, key: &K) -> Option<&B> {
        self.buckets.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets.contains_key(key)
    }
}

impl<K, B> Multimap<K, B>
where
    K: Eq + Hash,
    B: Bucket,
{
    /// Adds `value` to the bucket of `key`, creating the bucket on first use.
    ///
    /// Returns `true` if the bucket grew.
    pub fn put(&mut self, key: K, value: B::Value) -> bool {
        let grew = self.buckets.entry(key).or_default().add(value);
        if grew {
            self.len += 1;
        }
        grew
    }

    /// Returns `true` if `value` is stored under `key`.
    pub fn contains_entry(&self, key: &K, value: &B::Value) -> bool
    where
        B::Value: PartialEq,
    {
        self.buckets
            .get(key)
            .is_some_and(|bucket| bucket.holds(value))
    }

    /// Iterates every `(key, value)` pair, grouped by key.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &B::Value)> + '_ {
        self.buckets
            .iter()
            .flat_map(|(key, bucket)| bucket.values().map(move |value| (key, value)))
    }
}

impl<K: Eq + Hash, B: PartialEq> PartialEq for Multimap<K, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.buckets == other.buckets
    }
}

impl<K: Eq + Hash, B: Eq> Eq for Multimap<K, B> {}

impl<K, B> Default for Multimap<K, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, B> Sink<(K, B::Value)> for Multimap<K, B>
where
    K: Eq + Hash,
    B: Bucket,
{
    fn put(&mut self, (key, value): (K, B::Value)) {
        Multimap::put(self, key, value);
    }

    fn reserve(&mut self, additional: usize) {
        self.buckets.reserve(additional);
    }
}

impl<K: fmt::Debug, B: fmt::Debug> fmt::Debug for Multimap<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.buckets.iter()).finish()
    }
}

/// The per-key value container of a [`Multimap`].
pub trait Bucket: Default {
    type Value;

    /// Iterator over the values held by the bucket.
    type Values<'a>: Iterator<Item = &'a Self::Value>
    where
        Self: 'a;

    /// Adds a value, returning `true` if the bucket grew.
    fn add(&mut self, value: Self::Value) -> bool;

    fn values(&self) -> Self::Values<'_>;

    /// Returns `true` if an equal value is held.
    fn holds(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.values().any(|held| held == value)
    }
}

impl<V> Bucket for Vec<V> {
    type Value = V;
    type Values<'a>
        = std::slice::Iter<'a, V>
    where
        Self: 'a;

    fn add(&mut self, value: V) -> bool {
        self.push(value);
        true
    }

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<V: Eq + Hash> Bucket for HashSet<V> {
    type Value = V;
    type Values<'a>
        = std::collections::hash_set::Iter<'a, V>
    where
        Self: 'a;

    fn add(&mut self, value: V) -> bool {
        self.insert(value)
    }

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }

    fn holds(&self, value: &V) -> bool {
        self.contains(value)
    }
}

impl<V: Ord> Bucket for BTreeSet<V> {
    type Value = V;
    type Values<'a>
        = std::collections::btree_set::Iter<'a, V>
    where
        Self: 'a;

    fn add(&mut self, value: V) -> bool {
        self.insert(value)
    }

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }

    fn holds(&self, value: &V) -> bool {
        self.contains(value)
    }
}
