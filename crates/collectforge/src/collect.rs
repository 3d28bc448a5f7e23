//! The validating collection builder.
//!
//! [`Collect`] gathers a source and its operators one method at a time. Any of
//! them may be left absent through the `maybe_*` methods; the terminal call
//! checks that everything it needs is present and only then walks the source.
//!
//! Absent arguments are reported in a fixed order: source, predicate, key
//! function, mapping (or value) function, comparator. The first one missing
//! wins.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use collectforge_config::CollectConfig;
use collectforge_core::traversal;
use collectforge_core::{
    Argument, CollectError, ListMultimap, OrderedMap, OrderedSet, PassOptions, Result,
    SetMultimap, Sink, SortedSetMultimap, Source,
};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::operator::{AcceptAll, Cloned, Mapping, Predicate, Unkeyed};

/// Builder for a single collection pass over a borrowed source.
///
/// Without further configuration every element is admitted and cloned into
/// the target as is.
///
/// # Example
///
/// ```
/// use collectforge::Collect;
///
/// let source = vec![Some(1), None, Some(2), Some(3), Some(4)];
/// let names = Collect::new(&source)
///     .filter(|n: &Option<i32>| n.is_some())
///     .map(|n: &Option<i32>| n.map(|n| n.to_string()).unwrap_or_default())
///     .into_vec()
///     .unwrap();
///
/// assert_eq!(names, vec!["1", "2", "3", "4"]);
/// ```
pub struct Collect<'s, S: ?Sized, P = AcceptAll, M = Cloned, K = Unkeyed> {
    source: Option<&'s S>,
    predicate: Option<P>,
    function: Option<M>,
    function_argument: Argument,
    key_function: Option<K>,
    options: PassOptions,
}

impl<'s, S: Source + ?Sized> Collect<'s, S> {
    /// Starts a pass over `source`.
    pub fn new(source: &'s S) -> Self {
        Self::maybe_new(Some(source))
    }

    /// Starts a pass over a source that may be absent.
    pub fn maybe_new(source: Option<&'s S>) -> Self {
        Self {
            source,
            predicate: Some(AcceptAll),
            function: Some(Cloned),
            function_argument: Argument::Function,
            key_function: None,
            options: PassOptions::default(),
        }
    }
}

impl<'s, S, P, M, K> Collect<'s, S, P, M, K>
where
    S: Source + ?Sized,
{
    /// Admits only the elements for which `predicate` returns `true`.
    pub fn filter<Q>(self, predicate: Q) -> Collect<'s, S, Q, M, K>
    where
        Q: Fn(&S::Item) -> bool,
    {
        self.maybe_filter(Some(predicate))
    }

    pub fn maybe_filter<Q>(self, predicate: Option<Q>) -> Collect<'s, S, Q, M, K>
    where
        Q: Fn(&S::Item) -> bool,
    {
        Collect {
            source: self.source,
            predicate,
            function: self.function,
            function_argument: self.function_argument,
            key_function: self.key_function,
            options: self.options,
        }
    }

    /// Puts `function(element)` instead of the element itself.
    pub fn map<T, N>(self, function: N) -> Collect<'s, S, P, N, K>
    where
        N: Fn(&S::Item) -> T,
    {
        self.maybe_map(Some(function))
    }

    pub fn maybe_map<T, N>(self, function: Option<N>) -> Collect<'s, S, P, N, K>
    where
        N: Fn(&S::Item) -> T,
    {
        self.with_function(function, Argument::Function)
    }

    /// Derives map values with `value_function` instead of storing the element.
    ///
    /// Equivalent to [`map`](Self::map), but a missing value function is
    /// reported as such.
    pub fn value<V, N>(self, value_function: N) -> Collect<'s, S, P, N, K>
    where
        N: Fn(&S::Item) -> V,
    {
        self.maybe_value(Some(value_function))
    }

    pub fn maybe_value<V, N>(self, value_function: Option<N>) -> Collect<'s, S, P, N, K>
    where
        N: Fn(&S::Item) -> V,
    {
        self.with_function(value_function, Argument::ValueFunction)
    }

    /// Derives map keys with `key_function`.
    pub fn key<Q, J>(self, key_function: J) -> Collect<'s, S, P, M, J>
    where
        J: Fn(&S::Item) -> Q,
    {
        self.maybe_key(Some(key_function))
    }

    pub fn maybe_key<Q, J>(self, key_function: Option<J>) -> Collect<'s, S, P, M, J>
    where
        J: Fn(&S::Item) -> Q,
    {
        Collect {
            source: self.source,
            predicate: self.predicate,
            function: self.function,
            function_argument: self.function_argument,
            key_function,
            options: self.options,
        }
    }

    /// Replaces the pass options.
    pub fn with_options(mut self, options: PassOptions) -> Self {
        self.options = options;
        self
    }

    /// Applies the pass options described by `config`.
    pub fn with_config(self, config: CollectConfig) -> Self {
        self.with_options(config.pass_options())
    }

    fn with_function<N>(self, function: Option<N>, argument: Argument) -> Collect<'s, S, P, N, K> {
        Collect {
            source: self.source,
            predicate: self.predicate,
            function,
            function_argument: argument,
            key_function: self.key_function,
            options: self.options,
        }
    }

    // Key/value terminals need the key function, which is checked ahead of
    // the value function.
    fn parts(self, keyed: bool) -> Result<Parts<'s, S, P, M, K>> {
        let source = self.source.ok_or_else(|| reject(Argument::Source))?;
        let predicate = self.predicate.ok_or_else(|| reject(Argument::Predicate))?;
        if keyed && self.key_function.is_none() {
            return Err(reject(Argument::KeyFunction));
        }
        let function = self
            .function
            .ok_or_else(|| reject(self.function_argument))?;
        Ok(Parts {
            source,
            predicate,
            function,
            key_function: self.key_function,
            options: self.options,
        })
    }
}

struct Parts<'s, S: ?Sized, P, M, K> {
    source: &'s S,
    predicate: P,
    function: M,
    key_function: Option<K>,
    options: PassOptions,
}

fn reject(argument: Argument) -> CollectError {
    debug!(%argument, "collect request rejected");
    CollectError::missing(argument)
}

fn require<C>(comparator: Option<C>) -> Result<C> {
    comparator.ok_or_else(|| reject(Argument::Comparator))
}

/// Element-shaped terminals.
impl<'s, S, P, M, K> Collect<'s, S, P, M, K>
where
    S: Source + ?Sized,
    P: Predicate<S::Item>,
    M: Mapping<S::Item>,
{
    /// Fills any default-constructible sink.
    ///
    /// ```
    /// use collectforge::Collect;
    /// use smallvec::SmallVec;
    ///
    /// let small: SmallVec<[i32; 4]> = Collect::new(&[1, 2, 3]).into_container().unwrap();
    /// assert_eq!(small.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn into_container<C>(self) -> Result<C>
    where
        C: Sink<M::Output> + Default,
    {
        let parts = self.parts(false)?;
        Ok(fill(parts, C::default()))
    }

    pub fn into_vec(self) -> Result<Vec<M::Output>> {
        self.into_container()
    }

    pub fn into_deque(self) -> Result<VecDeque<M::Output>> {
        self.into_container()
    }

    pub fn into_linked_list(self) -> Result<LinkedList<M::Output>> {
        self.into_container()
    }

    pub fn into_boxed_slice(self) -> Result<Box<[M::Output]>> {
        self.into_vec().map(Vec::into_boxed_slice)
    }

    pub fn into_hash_set(self) -> Result<HashSet<M::Output>>
    where
        M::Output: Eq + Hash,
    {
        self.into_container()
    }

    pub fn into_index_set(self) -> Result<IndexSet<M::Output>>
    where
        M::Output: Eq + Hash,
    {
        self.into_container()
    }

    /// Collects into a set in natural order.
    pub fn into_sorted_set(self) -> Result<BTreeSet<M::Output>>
    where
        M::Output: Ord,
    {
        self.into_container()
    }

    /// Collects into a set ordered by `comparator`.
    pub fn into_sorted_set_by<C>(self, comparator: C) -> Result<OrderedSet<M::Output, C>>
    where
        C: Fn(&M::Output, &M::Output) -> Ordering,
    {
        self.maybe_into_sorted_set_by(Some(comparator))
    }

    pub fn maybe_into_sorted_set_by<C>(
        self,
        comparator: Option<C>,
    ) -> Result<OrderedSet<M::Output, C>>
    where
        C: Fn(&M::Output, &M::Output) -> Ordering,
    {
        let parts = self.parts(false)?;
        let comparator = require(comparator)?;
        let staged = fill(parts, Vec::new());
        Ok(OrderedSet::from_unsorted(staged, comparator))
    }
}

fn fill<S, P, M, K, C>(parts: Parts<'_, S, P, M, K>, target: C) -> C
where
    S: Source + ?Sized,
    P: Predicate<S::Item>,
    M: Mapping<S::Item>,
    C: Sink<M::Output>,
{
    let Parts {
        source,
        predicate,
        function,
        options,
        ..
    } = parts;
    traversal::populate(
        source,
        |element| predicate.test(element),
        |element| function.apply(element),
        target,
        options,
    )
}

/// Key/value-shaped terminals, available once a key function is set.
impl<'s, S, P, M, K> Collect<'s, S, P, M, K>
where
    S: Source + ?Sized,
    P: Predicate<S::Item>,
    M: Mapping<S::Item>,
    K: Mapping<S::Item>,
{
    /// Fills any default-constructible key/value sink.
    pub fn into_map_container<C>(self) -> Result<C>
    where
        C: Sink<(K::Output, M::Output)> + Default,
    {
        let (parts, key_function) = self.keyed_parts()?;
        Ok(fill_keyed(parts, key_function, C::default()))
    }

    /// Collects into a `HashMap`; a repeated key keeps the last value.
    pub fn into_hash_map(self) -> Result<HashMap<K::Output, M::Output>>
    where
        K::Output: Eq + Hash,
    {
        self.into_map_container()
    }

    pub fn into_index_map(self) -> Result<IndexMap<K::Output, M::Output>>
    where
        K::Output: Eq + Hash,
    {
        self.into_map_container()
    }

    /// Collects into a map in natural key order.
    ///
    /// ```
    /// use collectforge::Collect;
    ///
    /// let source = vec![4, 1, 3, 2];
    /// let map = Collect::new(&source).key(|n: &i32| n.to_string()).into_sorted_map().unwrap();
    ///
    /// let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    /// assert_eq!(keys, vec!["1", "2", "3", "4"]);
    /// ```
    pub fn into_sorted_map(self) -> Result<BTreeMap<K::Output, M::Output>>
    where
        K::Output: Ord,
    {
        self.into_map_container()
    }

    /// Collects into a map whose keys are ordered by `comparator`.
    pub fn into_sorted_map_by<C>(self, comparator: C) -> Result<OrderedMap<K::Output, M::Output, C>>
    where
        C: Fn(&K::Output, &K::Output) -> Ordering,
    {
        self.maybe_into_sorted_map_by(Some(comparator))
    }

    pub fn maybe_into_sorted_map_by<C>(
        self,
        comparator: Option<C>,
    ) -> Result<OrderedMap<K::Output, M::Output, C>>
    where
        C: Fn(&K::Output, &K::Output) -> Ordering,
    {
        let (parts, key_function) = self.keyed_parts()?;
        let comparator = require(comparator)?;
        let staged = fill_keyed(parts, key_function, Vec::new());
        Ok(OrderedMap::from_unsorted(staged, comparator))
    }

    /// Collects into a multimap keeping every value per key.
    pub fn into_list_multimap(self) -> Result<ListMultimap<K::Output, M::Output>>
    where
        K::Output: Eq + Hash,
    {
        self.into_map_container()
    }

    /// Collects into a multimap keeping distinct values per key.
    pub fn into_set_multimap(self) -> Result<SetMultimap<K::Output, M::Output>>
    where
        K::Output: Eq + Hash,
        M::Output: Eq + Hash,
    {
        self.into_map_container()
    }

    /// Collects into a multimap keeping distinct values per key in natural order.
    pub fn into_sorted_set_multimap(self) -> Result<SortedSetMultimap<K::Output, M::Output>>
    where
        K::Output: Eq + Hash,
        M::Output: Ord,
    {
        self.into_map_container()
    }

    fn keyed_parts(self) -> Result<(Parts<'s, S, P, M, K>, K)> {
        let mut parts = self.parts(true)?;
        let key_function = parts
            .key_function
            .take()
            .ok_or_else(|| reject(Argument::KeyFunction))?;
        Ok((parts, key_function))
    }
}

fn fill_keyed<S, P, M, K, C>(parts: Parts<'_, S, P, M, K>, key_function: K, target: C) -> C
where
    S: Source + ?Sized,
    P: Predicate<S::Item>,
    M: Mapping<S::Item>,
    K: Mapping<S::Item>,
    C: Sink<(K::Output, M::Output)>,
{
    let Parts {
        source,
        predicate,
        function,
        options,
        ..
    } = parts;
    traversal::populate(
        source,
        |element| predicate.test(element),
        |element| (key_function.apply(element), function.apply(element)),
        target,
        options,
    )
}
