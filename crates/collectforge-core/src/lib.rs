//! CollectForge Core - traits and traversal behind the collection builders
//!
//! This crate provides the fundamental abstractions for CollectForge:
//! - [`Source`] for read-only input sequences, with an indexed-access capability
//! - [`Sink`] for target containers that accept inserted items
//! - Comparator-ordered containers ([`OrderedSet`], [`OrderedMap`])
//! - Multimaps with pluggable value buckets
//! - The single-pass [`traversal`] that fills a target from a source

pub mod error;
pub mod multimap;
pub mod ordered;
pub mod sink;
pub mod source;
pub mod traversal;

pub use error::{Argument, CollectError, Result};
pub use multimap::{Bucket, ListMultimap, Multimap, SetMultimap, SortedSetMultimap};
pub use ordered::{OrderedMap, OrderedSet};
pub use sink::Sink;
pub use source::Source;
pub use traversal::{PassOptions, Traversal};
