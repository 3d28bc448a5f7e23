//! Declarative macros for the factory modules.
//!
//! Every factory module exposes the same handful of functions and differs only
//! in the container it returns. These macros stamp out one module per target
//! container; the container's `Sink` impl supplies its identity semantics.

/// Generates a factory module for an element-shaped target.
///
/// The target must be a single-parameter container implementing `Sink<T>`
/// and `Default`. An optional trailing block adds items to the module.
///
/// # Usage
/// ```ignore
/// collection_factory!(
///     /// Builds `Vec`s.
///     lists => Vec in std::vec
/// );
/// ```
macro_rules! collection_factory {
    (
        $(#[$doc:meta])* $module:ident => $target:ident in $($path:ident)::+
        $({ $($extra:item)* })?
    ) => {
        $(#[$doc])*
        pub mod $module {
            use collectforge_core::traversal;
            use collectforge_core::{PassOptions, Sink, Source};
            use $($path)::+::$target;

            $($($extra)*)?

            #[doc = concat!("Builds a `", stringify!($target), "` of `function(element)` for every element.")]
            pub fn transform<S, T, M>(source: &S, function: M) -> $target<T>
            where
                S: Source + ?Sized,
                M: Fn(&S::Item) -> T,
                $target<T>: Sink<T> + Default,
            {
                traversal::transform(source, function, <$target<T>>::default(), PassOptions::default())
            }

            #[doc = concat!("Builds a `", stringify!($target), "` of the elements admitted by `predicate`.")]
            pub fn filter<S, P>(source: &S, predicate: P) -> $target<S::Item>
            where
                S: Source + ?Sized,
                S::Item: Clone,
                P: Fn(&S::Item) -> bool,
                $target<S::Item>: Sink<S::Item> + Default,
            {
                traversal::filter(source, predicate, <$target<S::Item>>::default(), PassOptions::default())
            }

            #[doc = concat!("Builds a `", stringify!($target), "` of `function(element)` for every element admitted by `predicate`.")]
            ///
            /// `function` never sees a rejected element.
            pub fn filter_transform<S, T, P, M>(source: &S, predicate: P, function: M) -> $target<T>
            where
                S: Source + ?Sized,
                P: Fn(&S::Item) -> bool,
                M: Fn(&S::Item) -> T,
                $target<T>: Sink<T> + Default,
            {
                traversal::filter_transform(
                    source,
                    predicate,
                    function,
                    <$target<T>>::default(),
                    PassOptions::default(),
                )
            }
        }
    };
}

/// Generates a factory module for a key/value-shaped target.
///
/// The target must be a two-parameter container implementing `Sink<(K, V)>`
/// and `Default`; type aliases such as `ListMultimap` qualify.
///
/// # Usage
/// ```ignore
/// map_factory!(
///     /// Builds `HashMap`s.
///     maps => HashMap in std::collections
/// );
/// ```
macro_rules! map_factory {
    (
        $(#[$doc:meta])* $module:ident => $target:ident in $($path:ident)::+
        $({ $($extra:item)* })?
    ) => {
        $(#[$doc])*
        pub mod $module {
            use collectforge_core::traversal;
            use collectforge_core::{PassOptions, Sink, Source};
            use $($path)::+::$target;

            $($($extra)*)?

            #[doc = concat!("Builds a `", stringify!($target), "` from `key_function(element)` to each element.")]
            pub fn index<S, K, KF>(source: &S, key_function: KF) -> $target<K, S::Item>
            where
                S: Source + ?Sized,
                S::Item: Clone,
                KF: Fn(&S::Item) -> K,
                $target<K, S::Item>: Sink<(K, S::Item)> + Default,
            {
                traversal::index(source, key_function, <$target<K, S::Item>>::default(), PassOptions::default())
            }

            #[doc = concat!("Builds a `", stringify!($target), "` from `key_function(element)` to `value_function(element)`.")]
            pub fn index_with<S, K, V, KF, VF>(
                source: &S,
                key_function: KF,
                value_function: VF,
            ) -> $target<K, V>
            where
                S: Source + ?Sized,
                KF: Fn(&S::Item) -> K,
                VF: Fn(&S::Item) -> V,
                $target<K, V>: Sink<(K, V)> + Default,
            {
                traversal::index_with(
                    source,
                    key_function,
                    value_function,
                    <$target<K, V>>::default(),
                    PassOptions::default(),
                )
            }

            #[doc = concat!("Builds a `", stringify!($target), "` from `key_function(element)` to each element admitted by `predicate`.")]
            pub fn filter_index<S, K, P, KF>(source: &S, predicate: P, key_function: KF) -> $target<K, S::Item>
            where
                S: Source + ?Sized,
                S::Item: Clone,
                P: Fn(&S::Item) -> bool,
                KF: Fn(&S::Item) -> K,
                $target<K, S::Item>: Sink<(K, S::Item)> + Default,
            {
                traversal::filter_index(
                    source,
                    predicate,
                    key_function,
                    <$target<K, S::Item>>::default(),
                    PassOptions::default(),
                )
            }

            #[doc = concat!("Builds a `", stringify!($target), "` from `key_function(element)` to `value_function(element)` for every element admitted by `predicate`.")]
            pub fn filter_index_with<S, K, V, P, KF, VF>(
                source: &S,
                predicate: P,
                key_function: KF,
                value_function: VF,
            ) -> $target<K, V>
            where
                S: Source + ?Sized,
                P: Fn(&S::Item) -> bool,
                KF: Fn(&S::Item) -> K,
                VF: Fn(&S::Item) -> V,
                $target<K, V>: Sink<(K, V)> + Default,
            {
                traversal::filter_index_with(
                    source,
                    predicate,
                    key_function,
                    value_function,
                    <$target<K, V>>::default(),
                    PassOptions::default(),
                )
            }
        }
    };
}
