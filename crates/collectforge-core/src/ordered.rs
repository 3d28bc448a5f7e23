//! Containers ordered by a caller-supplied comparator.
//!
//! `BTreeSet` and `BTreeMap` only know the natural `Ord` of their keys. When a
//! builder is given an explicit comparator, the result lands in an
//! [`OrderedSet`] or [`OrderedMap`] instead: a sorted vector that consults the
//! comparator for every placement decision.
//!
//! Elements that compare `Equal` are ties. A set keeps the element inserted
//! first; a map keeps the key inserted first and takes the value written last.
//!
//! Single inserts shift the vector, so builders stage their output and load it
//! in one go with `from_unsorted` or `extend`: a stable sort followed by a
//! pass that collapses ties, O(n log n) overall.

use std::cmp::Ordering;
use std::fmt;
use std::vec;

use crate::sink::Sink;

/// A set of unique elements sorted by a comparator.
///
/// # Example
///
/// ```
/// use collectforge_core::OrderedSet;
///
/// let mut set = OrderedSet::new(|a: &i32, b: &i32| b.cmp(a));
/// set.insert(1);
/// set.insert(3);
/// set.insert(2);
/// set.insert(3);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.into_vec(), vec![3, 2, 1]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, C> {
    elements: Vec<T>,
    comparator: C,
}

impl<T, C> OrderedSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty set ordered by `comparator`.
    pub fn new(comparator: C) -> Self {
        Self {
            elements: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Builds a set from elements in arbitrary order.
    ///
    /// Of several elements comparing equal, the earliest in `elements` is kept.
    ///
    /// ```
    /// use collectforge_core::OrderedSet;
    ///
    /// let set = OrderedSet::from_unsorted(vec!["bb", "a", "cc", "b"], |a: &&str, b: &&str| {
    ///     a.len().cmp(&b.len())
    /// });
    /// assert_eq!(set.into_vec(), vec!["a", "bb"]);
    /// ```
    pub fn from_unsorted(elements: Vec<T>, comparator: C) -> Self {
        let mut set = Self {
            elements,
            comparator,
        };
        set.settle();
        set
    }

    // Restores the sorted, tie-free invariant. Stable, so earlier elements win.
    fn settle(&mut self) {
        let comparator = &self.comparator;
        self.elements.sort_by(|a, b| comparator(a, b));
        self.elements
            .dedup_by(|later, kept| comparator(&*kept, &*later) == Ordering::Equal);
    }

    fn position(&self, value: &T) -> Result<usize, usize> {
        self.elements
            .binary_search_by(|held| (self.comparator)(held, value))
    }

    /// Inserts `value` unless an equal element is already present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn insert(&mut self, value: T) -> bool {
        match self.position(&value) {
            Ok(_) => false,
            Err(index) => {
                self.elements.insert(index, value);
                true
            }
        }
    }

    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_ok()
    }

    /// Returns the stored element equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.position(value).ok().map(|index| &self.elements[index])
    }

    /// Returns the comparator ordering this set.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, C> OrderedSet<T, C> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates the elements in comparator order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements in comparator order as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the set, returning its elements in comparator order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T, C> Sink<T> for OrderedSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn put(&mut self, item: T) {
        self.insert(item);
    }

    fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }
}

impl<T, C> Extend<T> for OrderedSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Adds every element, keeping present elements over equal newcomers.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let before = self.elements.len();
        self.elements.extend(iter);
        if self.elements.len() != before {
            self.settle();
        }
    }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

/// A map with unique keys sorted by a comparator.
///
/// # Example
///
/// ```
/// use collectforge_core::OrderedMap;
///
/// let mut map = OrderedMap::new(|a: &String, b: &String| a.len().cmp(&b.len()));
/// map.insert("ccc".to_string(), 1);
/// map.insert("a".to_string(), 2);
/// map.insert("b".to_string(), 3);
///
/// // "a" and "b" tie on length: the first key stays, the last value wins.
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "ccc"]);
/// assert_eq!(map.get(&"a".to_string()), Some(&3));
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, C> {
    entries: Vec<(K, V)>,
    comparator: C,
}

impl<K, V, C> OrderedMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Creates an empty map whose keys are ordered by `comparator`.
    pub fn new(comparator: C) -> Self {
        Self {
            entries: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Builds a map from entries in arbitrary order.
    ///
    /// Entries whose keys compare equal collapse into one: the earliest key is
    /// kept with the latest value.
    pub fn from_unsorted(entries: Vec<(K, V)>, comparator: C) -> Self {
        let mut map = Self {
            entries,
            comparator,
        };
        map.settle();
        map
    }

    fn settle(&mut self) {
        let comparator = &self.comparator;
        let mut staged = std::mem::take(&mut self.entries);
        staged.sort_by(|(a, _), (b, _)| comparator(a, b));

        let mut merged: Vec<(K, V)> = Vec::with_capacity(staged.len());
        for (key, value) in staged {
            if let Some((kept, slot)) = merged.last_mut() {
                if comparator(&*kept, &key) == Ordering::Equal {
                    *slot = value;
                    continue;
                }
            }
            merged.push((key, value));
        }
        self.entries = merged;
    }

    fn position(&self, key: &K) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(held, _)| (self.comparator)(held, key))
    }

    /// Inserts `value` under `key`.
    ///
    /// If an equal key is present, its value is replaced and the old value
    /// returned. The stored key is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Ok(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            Err(index) => {
                self.entries.insert(index, (key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).ok().map(|index| &self.entries[index].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_ok()
    }

    /// Returns the comparator ordering the keys.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(key, value)| (key, value))
    }

    /// Consumes the map, returning its entries in key order.
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K, V, C> Sink<(K, V)> for OrderedMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn put(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }
}

impl<K, V, C> Extend<(K, V)> for OrderedMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Inserts every entry; a key equal to a present one only replaces its value.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let before = self.entries.len();
        self.entries.extend(iter);
        if self.entries.len() != before {
            self.settle();
        }
    }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
