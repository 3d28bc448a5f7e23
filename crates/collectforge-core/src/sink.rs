//! Insertion into target containers.
//!
//! [`Sink`] is the one capability the traversal needs from a target: accept
//! an item. Collection-shaped sinks take the element itself, map-shaped sinks
//! take a `(key, value)` pair. Identity semantics belong to the container:
//! sets collapse equal elements, maps overwrite the value of a repeated key.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use indexmap::{IndexMap, IndexSet};
use smallvec::{Array, SmallVec};

/// A container that accepts inserted items.
///
/// # Example
///
/// ```
/// use collectforge_core::Sink;
/// use std::collections::HashMap;
///
/// let mut map = HashMap::new();
/// map.put(("a", 1));
/// map.put(("a", 2));
/// assert_eq!(map["a"], 2);
/// ```
pub trait Sink<T> {
    /// Inserts one item.
    fn put(&mut self, item: T);

    /// Prepares room for `additional` items. Containers without a notion of
    /// capacity ignore this.
    fn reserve(&mut self, _additional: usize) {}
}

impl<T> Sink<T> for Vec<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }
}

impl<T> Sink<T> for VecDeque<T> {
    fn put(&mut self, item: T) {
        self.push_back(item);
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }
}

impl<T> Sink<T> for LinkedList<T> {
    fn put(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<A: Array> Sink<A::Item> for SmallVec<A> {
    fn put(&mut self, item: A::Item) {
        self.push(item);
    }

    fn reserve(&mut self, additional: usize) {
        SmallVec::reserve(self, additional);
    }
}

impl<T: Eq + Hash, H: BuildHasher> Sink<T> for HashSet<T, H> {
    fn put(&mut self, item: T) {
        self.insert(item);
    }

    fn reserve(&mut self, additional: usize) {
        HashSet::reserve(self, additional);
    }
}

impl<T: Eq + Hash, H: BuildHasher> Sink<T> for IndexSet<T, H> {
    fn put(&mut self, item: T) {
        self.insert(item);
    }

    fn reserve(&mut self, additional: usize) {
        IndexSet::reserve(self, additional);
    }
}

impl<T: Ord> Sink<T> for BTreeSet<T> {
    fn put(&mut self, item: T) {
        self.insert(item);
    }
}

impl<K: Eq + Hash, V, H: BuildHasher> Sink<(K, V)> for HashMap<K, V, H> {
    fn put(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    fn reserve(&mut self, additional: usize) {
        HashMap::reserve(self, additional);
    }
}

impl<K: Eq + Hash, V, H: BuildHasher> Sink<(K, V)> for IndexMap<K, V, H> {
    fn put(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    fn reserve(&mut self, additional: usize) {
        IndexMap::reserve(self, additional);
    }
}

impl<K: Ord, V> Sink<(K, V)> for BTreeMap<K, V> {
    fn put(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}
