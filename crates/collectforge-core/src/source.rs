//! Source sequences for collection builders.
//!
//! A [`Source`] is anything the builder can read once, element by element,
//! without consuming or mutating it. Sources that keep their elements in
//! contiguous or ring storage additionally report O(1) indexed access through
//! [`Source::indexed_len`]; the traversal uses that capability to walk the
//! source by index instead of creating an iterator.
//!
//! | source              | indexed |
//! |---------------------|---------|
//! | `Vec<T>`, `[T]`, `[T; N]`, `Box<[T]>` | yes |
//! | `VecDeque<T>`, `SmallVec<A>`, `IndexSet<T>` | yes |
//! | `LinkedList<T>`, `HashSet<T>`, `BTreeSet<T>` | no |

use std::collections::{btree_set, hash_set, linked_list, vec_deque};
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::slice;

use indexmap::IndexSet;
use smallvec::{Array, SmallVec};

/// A read-only, single-pass element provider.
///
/// # Example
///
/// ```
/// use collectforge_core::Source;
/// use std::collections::LinkedList;
///
/// let indexed = vec![1, 2, 3];
/// assert_eq!(indexed.indexed_len(), Some(3));
/// assert_eq!(Source::get(&indexed, 1), Some(&2));
///
/// let linked: LinkedList<i32> = indexed.iter().copied().collect();
/// assert_eq!(linked.indexed_len(), None);
/// assert_eq!(linked.elements().count(), 3);
/// ```
pub trait Source {
    /// The element type handed to predicates and functions.
    type Item;

    /// Sequential iterator over borrowed elements.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns a sequential iterator over all elements.
    fn elements(&self) -> Self::Iter<'_>;

    /// Returns the element count when the source supports O(1) indexed access.
    ///
    /// Returning `Some(n)` promises that [`Source::get`] yields an element for
    /// every index in `0..n`, in the same order as [`Source::elements`].
    fn indexed_len(&self) -> Option<usize> {
        None
    }

    /// Returns the element at `index` for indexed sources.
    fn get(&self, _index: usize) -> Option<&Self::Item> {
        None
    }

    /// Returns a lower bound on the number of elements.
    fn len_hint(&self) -> usize {
        match self.indexed_len() {
            Some(len) => len,
            None => self.elements().size_hint().0,
        }
    }
}

impl<S: Source + ?Sized> Source for &S {
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        (**self).elements()
    }

    fn indexed_len(&self) -> Option<usize> {
        (**self).indexed_len()
    }

    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }

    fn len_hint(&self) -> usize {
        (**self).len_hint()
    }
}

impl<T> Source for [T] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn indexed_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Source for [T; N] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn indexed_len(&self) -> Option<usize> {
        Some(N)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Source for Vec<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn indexed_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Source for Box<[T]> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn indexed_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn get(&self, index: usize) -> Option<&T> {
        (**self).get(index)
    }
}

impl<T> Source for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn indexed_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<A: Array> Source for SmallVec<A> {
    type Item = A::Item;
    type Iter<'a>
        = slice::Iter<'a, A::Item>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn indexed_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn get(&self, index: usize) -> Option<&A::Item> {
        self.as_slice().get(index)
    }
}

impl<T, H> Source for IndexSet<T, H> {
    type Item = T;
    type Iter<'a>
        = indexmap::set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn indexed_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.get_index(index)
    }
}

impl<T> Source for LinkedList<T> {
    type Item = T;
    type Iter<'a>
        = linked_list::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len_hint(&self) -> usize {
        self.len()
    }
}

impl<T, H> Source for HashSet<T, H> {
    type Item = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len_hint(&self) -> usize {
        self.len()
    }
}

impl<T> Source for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len_hint(&self) -> usize {
        self.len()
    }
}
