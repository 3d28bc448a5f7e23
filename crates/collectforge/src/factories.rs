//! Factory modules, one per target container.
//!
//! Element-shaped targets expose `transform`, `filter` and
//! `filter_transform`; key/value-shaped targets expose `index`, `index_with`,
//! `filter_index` and `filter_index_with`. Sorted targets add `_by` variants
//! taking an explicit comparator. All of them run with default pass options;
//! use [`Collect`](crate::Collect) to configure the pass.

collection_factory!(
    /// Builds `Vec`s.
    ///
    /// ```
    /// use collectforge::lists;
    ///
    /// let names = lists::filter_transform(&vec![Some(1), None, Some(3)], Option::is_some, |n| {
    ///     n.map(|n| n.to_string()).unwrap_or_default()
    /// });
    /// assert_eq!(names, vec!["1", "3"]);
    /// ```
    lists => Vec in std::vec
);

collection_factory!(
    /// Builds `VecDeque`s.
    deques => VecDeque in std::collections
);

collection_factory!(
    /// Builds `LinkedList`s.
    linked_lists => LinkedList in std::collections
);

collection_factory!(
    /// Builds `HashSet`s. Equal results collapse into one element.
    ///
    /// ```
    /// use collectforge::sets;
    ///
    /// let parities = sets::transform(&[1, 2, 3, 4], |n| n % 2);
    /// assert_eq!(parities.len(), 2);
    /// ```
    sets => HashSet in std::collections
);

collection_factory!(
    /// Builds `IndexSet`s, which keep the first-seen order of distinct elements.
    index_sets => IndexSet in indexmap
);

collection_factory!(
    /// Builds sorted sets.
    ///
    /// Without a comparator the result is a `BTreeSet` in natural order. The
    /// `_by` variants return an [`OrderedSet`](collectforge_core::OrderedSet)
    /// ordered by the given comparator; of several elements comparing equal,
    /// the first one visited is kept.
    ///
    /// ```
    /// use collectforge::sorted_sets;
    ///
    /// let descending = sorted_sets::transform_by(&[3, 1, 2], |n| n * 10, |a: &i32, b: &i32| b.cmp(a));
    /// assert_eq!(descending.into_vec(), vec![30, 20, 10]);
    /// ```
    sorted_sets => BTreeSet in std::collections {
        use std::cmp::Ordering;

        use collectforge_core::OrderedSet;

        /// Like [`transform`], ordered by `comparator`.
        pub fn transform_by<S, T, M, C>(source: &S, function: M, comparator: C) -> OrderedSet<T, C>
        where
            S: Source + ?Sized,
            M: Fn(&S::Item) -> T,
            C: Fn(&T, &T) -> Ordering,
        {
            let staged = traversal::transform(source, function, Vec::new(), PassOptions::default());
            OrderedSet::from_unsorted(staged, comparator)
        }

        /// Like [`filter`], ordered by `comparator`.
        pub fn filter_by<S, P, C>(source: &S, predicate: P, comparator: C) -> OrderedSet<S::Item, C>
        where
            S: Source + ?Sized,
            S::Item: Clone,
            P: Fn(&S::Item) -> bool,
            C: Fn(&S::Item, &S::Item) -> Ordering,
        {
            let staged = traversal::filter(source, predicate, Vec::new(), PassOptions::default());
            OrderedSet::from_unsorted(staged, comparator)
        }

        /// Like [`filter_transform`], ordered by `comparator`.
        pub fn filter_transform_by<S, T, P, M, C>(
            source: &S,
            predicate: P,
            function: M,
            comparator: C,
        ) -> OrderedSet<T, C>
        where
            S: Source + ?Sized,
            P: Fn(&S::Item) -> bool,
            M: Fn(&S::Item) -> T,
            C: Fn(&T, &T) -> Ordering,
        {
            let staged = traversal::filter_transform(
                source,
                predicate,
                function,
                Vec::new(),
                PassOptions::default(),
            );
            OrderedSet::from_unsorted(staged, comparator)
        }
    }
);

map_factory!(
    /// Builds `HashMap`s. A repeated key keeps the last value.
    ///
    /// ```
    /// use collectforge::maps;
    ///
    /// let by_initial = maps::index(&vec!["apple", "avocado", "cherry"], |word| {
    ///     word.chars().next()
    /// });
    /// assert_eq!(by_initial[&Some('a')], "avocado");
    /// ```
    maps => HashMap in std::collections
);

map_factory!(
    /// Builds `IndexMap`s, which keep keys in first-insertion order.
    index_maps => IndexMap in indexmap
);

map_factory!(
    /// Builds sorted maps.
    ///
    /// Without a comparator the result is a `BTreeMap` in natural key order.
    /// The `_by` variants return an [`OrderedMap`](collectforge_core::OrderedMap)
    /// whose keys are ordered by the given comparator. Keys comparing equal
    /// count as one key: the first key stays and the last value wins.
    ///
    /// ```
    /// use collectforge::sorted_maps;
    ///
    /// let by_name = sorted_maps::index(&vec![4, 1, 3, 2], |n| n.to_string());
    /// let keys: Vec<&str> = by_name.keys().map(String::as_str).collect();
    /// assert_eq!(keys, vec!["1", "2", "3", "4"]);
    /// ```
    sorted_maps => BTreeMap in std::collections {
        use std::cmp::Ordering;

        use collectforge_core::OrderedMap;

        /// Like [`index`], with keys ordered by `comparator`.
        pub fn index_by<S, K, KF, C>(source: &S, key_function: KF, comparator: C) -> OrderedMap<K, S::Item, C>
        where
            S: Source + ?Sized,
            S::Item: Clone,
            KF: Fn(&S::Item) -> K,
            C: Fn(&K, &K) -> Ordering,
        {
            let staged = traversal::index(source, key_function, Vec::new(), PassOptions::default());
            OrderedMap::from_unsorted(staged, comparator)
        }

        /// Like [`index_with`], with keys ordered by `comparator`.
        pub fn index_with_by<S, K, V, KF, VF, C>(
            source: &S,
            key_function: KF,
            value_function: VF,
            comparator: C,
        ) -> OrderedMap<K, V, C>
        where
            S: Source + ?Sized,
            KF: Fn(&S::Item) -> K,
            VF: Fn(&S::Item) -> V,
            C: Fn(&K, &K) -> Ordering,
        {
            let staged = traversal::index_with(
                source,
                key_function,
                value_function,
                Vec::new(),
                PassOptions::default(),
            );
            OrderedMap::from_unsorted(staged, comparator)
        }

        /// Like [`filter_index`], with keys ordered by `comparator`.
        pub fn filter_index_by<S, K, P, KF, C>(
            source: &S,
            predicate: P,
            key_function: KF,
            comparator: C,
        ) -> OrderedMap<K, S::Item, C>
        where
            S: Source + ?Sized,
            S::Item: Clone,
            P: Fn(&S::Item) -> bool,
            KF: Fn(&S::Item) -> K,
            C: Fn(&K, &K) -> Ordering,
        {
            let staged = traversal::filter_index(
                source,
                predicate,
                key_function,
                Vec::new(),
                PassOptions::default(),
            );
            OrderedMap::from_unsorted(staged, comparator)
        }

        /// Like [`filter_index_with`], with keys ordered by `comparator`.
        pub fn filter_index_with_by<S, K, V, P, KF, VF, C>(
            source: &S,
            predicate: P,
            key_function: KF,
            value_function: VF,
            comparator: C,
        ) -> OrderedMap<K, V, C>
        where
            S: Source + ?Sized,
            P: Fn(&S::Item) -> bool,
            KF: Fn(&S::Item) -> K,
            VF: Fn(&S::Item) -> V,
            C: Fn(&K, &K) -> Ordering,
        {
            let staged = traversal::filter_index_with(
                source,
                predicate,
                key_function,
                value_function,
                Vec::new(),
                PassOptions::default(),
            );
            OrderedMap::from_unsorted(staged, comparator)
        }
    }
);

map_factory!(
    /// Builds `ListMultimap`s. Every value is kept, in source order per key.
    ///
    /// ```
    /// use collectforge::list_multimaps;
    ///
    /// let by_parity = list_multimaps::index(&vec![1, 2, 3, 4, 5], |n| n % 2);
    /// assert_eq!(by_parity.get(&1), Some(&vec![1, 3, 5]));
    /// ```
    list_multimaps => ListMultimap in collectforge_core
);

map_factory!(
    /// Builds `SetMultimap`s. Equal values under one key collapse.
    set_multimaps => SetMultimap in collectforge_core
);

map_factory!(
    /// Builds `SortedSetMultimap`s. Values under each key are distinct and in
    /// natural order.
    sorted_set_multimaps => SortedSetMultimap in collectforge_core
);

/// Builds boxed slices, the frozen counterpart of [`lists`].
pub mod boxed_slices {
    use collectforge_core::Source;

    use super::lists;

    pub fn transform<S, T, M>(source: &S, function: M) -> Box<[T]>
    where
        S: Source + ?Sized,
        M: Fn(&S::Item) -> T,
    {
        lists::transform(source, function).into_boxed_slice()
    }

    pub fn filter<S, P>(source: &S, predicate: P) -> Box<[S::Item]>
    where
        S: Source + ?Sized,
        S::Item: Clone,
        P: Fn(&S::Item) -> bool,
    {
        lists::filter(source, predicate).into_boxed_slice()
    }

    pub fn filter_transform<S, T, P, M>(source: &S, predicate: P, function: M) -> Box<[T]>
    where
        S: Source + ?Sized,
        P: Fn(&S::Item) -> bool,
        M: Fn(&S::Item) -> T,
    {
        lists::filter_transform(source, predicate, function).into_boxed_slice()
    }
}
