//! Instrumented source fixture.
//!
//! [`CountingSource`] wraps a vector and counts every call the traversal makes
//! into it, so tests can tell which path a builder took and whether it touched
//! the source at all.
//!
//! # Example
//!
//! ```
//! use collectforge_core::Source;
//! use collectforge_test::CountingSource;
//!
//! let source = CountingSource::sequential(vec![1, 2, 3]);
//! assert_eq!(source.indexed_len(), None);
//! assert_eq!(source.elements().count(), 3);
//! assert_eq!(source.iterations(), 1);
//! assert!(source.was_traversed());
//! ```

use std::cell::Cell;
use std::slice;

use collectforge_core::Source;

/// A vector-backed source that records how it is read.
#[derive(Debug)]
pub struct CountingSource<T> {
    items: Vec<T>,
    indexed: bool,
    iterations: Cell<usize>,
    reads: Cell<usize>,
    capability_queries: Cell<usize>,
}

impl<T> CountingSource<T> {
    /// Creates a source that reports O(1) indexed access.
    pub fn indexed(items: Vec<T>) -> Self {
        Self::new(items, true)
    }

    /// Creates a source that only supports sequential iteration.
    pub fn sequential(items: Vec<T>) -> Self {
        Self::new(items, false)
    }

    fn new(items: Vec<T>, indexed: bool) -> Self {
        Self {
            items,
            indexed,
            iterations: Cell::new(0),
            reads: Cell::new(0),
            capability_queries: Cell::new(0),
        }
    }

    /// Number of sequential iterators handed out.
    pub fn iterations(&self) -> usize {
        self.iterations.get()
    }

    /// Number of indexed element reads.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of indexed-access capability queries.
    pub fn capability_queries(&self) -> usize {
        self.capability_queries.get()
    }

    /// Returns `true` if any element was requested, by either path.
    pub fn was_traversed(&self) -> bool {
        self.iterations() > 0 || self.reads() > 0
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Source for CountingSource<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iterations.set(self.iterations.get() + 1);
        self.items.iter()
    }

    fn indexed_len(&self) -> Option<usize> {
        self.capability_queries.set(self.capability_queries.get() + 1);
        self.indexed.then_some(self.items.len())
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.reads.set(self.reads.get() + 1);
        if self.indexed {
            self.items.get(index)
        } else {
            None
        }
    }

    fn len_hint(&self) -> usize {
        self.items.len()
    }
}
