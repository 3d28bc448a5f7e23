//! The single-pass traversal every builder runs.
//!
//! All factory functions reduce to [`populate`]: walk the source once, ask the
//! predicate about each element, and put the mapped element into the target.
//! The shape helpers below ([`transform`], [`filter`], [`index`], ...) only
//! decide what the predicate and mapping are.
//!
//! # Fast path
//!
//! When the source reports O(1) indexed access and the pass runs with
//! [`Traversal::Auto`], elements are visited by index and no iterator is
//! created. Otherwise the source's sequential iterator is used. Both paths
//! visit the same elements in the same order.

use tracing::trace;

use crate::sink::Sink;
use crate::source::Source;

/// How a pass walks its source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Traversal {
    /// Visit by index when the source supports it, sequentially otherwise.
    #[default]
    Auto,

    /// Always use the source's sequential iterator.
    Sequential,
}

/// Options for a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOptions {
    pub traversal: Traversal,

    /// Reserve room in the target for every source element before inserting.
    pub reserve_capacity: bool,
}

impl Default for PassOptions {
    fn default() -> Self {
        Self {
            traversal: Traversal::Auto,
            reserve_capacity: true,
        }
    }
}

impl PassOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn with_reserve_capacity(mut self, reserve_capacity: bool) -> Self {
        self.reserve_capacity = reserve_capacity;
        self
    }
}

/// Calls `visitor` once for every element of `source`, in source order.
///
/// # Example
///
/// ```
/// use collectforge_core::traversal::{visit, Traversal};
///
/// let mut seen = Vec::new();
/// visit(&vec![1, 2, 3], Traversal::Auto, |n| seen.push(*n));
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub fn visit<S, V>(source: &S, traversal: Traversal, mut visitor: V)
where
    S: Source + ?Sized,
    V: FnMut(&S::Item),
{
    match (traversal, source.indexed_len()) {
        (Traversal::Auto, Some(len)) => {
            trace!(traversal = "indexed", len, "visiting source");
            for index in 0..len {
                if let Some(element) = source.get(index) {
                    visitor(element);
                }
            }
        }
        _ => {
            trace!(traversal = "sequential", "visiting source");
            for element in source.elements() {
                visitor(element);
            }
        }
    }
}

/// Fills `target` with `function(element)` for every element admitted by
/// `predicate`, and returns it.
///
/// The predicate runs exactly once per element; the function runs exactly
/// once per admitted element and never sees a rejected one.
pub fn populate<S, T, C, P, M>(
    source: &S,
    predicate: P,
    function: M,
    mut target: C,
    options: PassOptions,
) -> C
where
    S: Source + ?Sized,
    C: Sink<T>,
    P: Fn(&S::Item) -> bool,
    M: Fn(&S::Item) -> T,
{
    if options.reserve_capacity {
        target.reserve(source.len_hint());
    }
    visit(source, options.traversal, |element| {
        if predicate(element) {
            target.put(function(element));
        }
    });
    target
}

/// Puts `function(element)` for every element.
pub fn transform<S, T, C, M>(source: &S, function: M, target: C, options: PassOptions) -> C
where
    S: Source + ?Sized,
    C: Sink<T>,
    M: Fn(&S::Item) -> T,
{
    populate(source, |_| true, function, target, options)
}

/// Puts a clone of every element admitted by `predicate`.
pub fn filter<S, C, P>(source: &S, predicate: P, target: C, options: PassOptions) -> C
where
    S: Source + ?Sized,
    S::Item: Clone,
    C: Sink<S::Item>,
    P: Fn(&S::Item) -> bool,
{
    populate(source, predicate, <S::Item as Clone>::clone, target, options)
}

/// Puts `function(element)` for every element admitted by `predicate`.
pub fn filter_transform<S, T, C, P, M>(
    source: &S,
    predicate: P,
    function: M,
    target: C,
    options: PassOptions,
) -> C
where
    S: Source + ?Sized,
    C: Sink<T>,
    P: Fn(&S::Item) -> bool,
    M: Fn(&S::Item) -> T,
{
    populate(source, predicate, function, target, options)
}

/// Puts `(key_function(element), element)` for every element.
pub fn index<S, K, C, KF>(source: &S, key_function: KF, target: C, options: PassOptions) -> C
where
    S: Source + ?Sized,
    S::Item: Clone,
    C: Sink<(K, S::Item)>,
    KF: Fn(&S::Item) -> K,
{
    populate(
        source,
        |_| true,
        |element| (key_function(element), element.clone()),
        target,
        options,
    )
}

/// Puts `(key_function(element), value_function(element))` for every element.
pub fn index_with<S, K, V, C, KF, VF>(
    source: &S,
    key_function: KF,
    value_function: VF,
    target: C,
    options: PassOptions,
) -> C
where
    S: Source + ?Sized,
    C: Sink<(K, V)>,
    KF: Fn(&S::Item) -> K,
    VF: Fn(&S::Item) -> V,
{
    populate(
        source,
        |_| true,
        |element| (key_function(element), value_function(element)),
        target,
        options,
    )
}

/// Puts `(key_function(element), element)` for every element admitted by
/// `predicate`.
pub fn filter_index<S, K, C, P, KF>(
    source: &S,
    predicate: P,
    key_function: KF,
    target: C,
    options: PassOptions,
) -> C
where
    S: Source + ?Sized,
    S::Item: Clone,
    C: Sink<(K, S::Item)>,
    P: Fn(&S::Item) -> bool,
    KF: Fn(&S::Item) -> K,
{
    populate(
        source,
        predicate,
        |element| (key_function(element), element.clone()),
        target,
        options,
    )
}

/// Puts `(key_function(element), value_function(element))` for every element
/// admitted by `predicate`.
pub fn filter_index_with<S, K, V, C, P, KF, VF>(
    source: &S,
    predicate: P,
    key_function: KF,
    value_function: VF,
    target: C,
    options: PassOptions,
) -> C
where
    S: Source + ?Sized,
    C: Sink<(K, V)>,
    P: Fn(&S::Item) -> bool,
    KF: Fn(&S::Item) -> K,
    VF: Fn(&S::Item) -> V,
{
    populate(
        source,
        predicate,
        |element| (key_function(element), value_function(element)),
        target,
        options,
    )
}

#[cfg(test)]
mod tests;
