//! CollectForge - build collections from any source in one pass
//!
//! Every builder walks a borrowed source once, keeps the elements a predicate
//! admits, maps them, and inserts the results into a fresh container. Sources
//! with O(1) indexed access are walked by index.
//!
//! Two entry points share that single traversal:
//! - factory modules ([`lists`], [`sets`], [`sorted_maps`], [`list_multimaps`], ...)
//!   of plain functions whose arguments cannot be absent
//! - the [`Collect`] builder, whose arguments may be absent and are checked
//!   before the source is touched
//!
//! # Example
//!
//! ```rust
//! use collectforge::prelude::*;
//!
//! let source = vec![1, 2, 3, 4];
//!
//! let odd = sets::filter(&source, |n| n % 2 == 1);
//! assert!(odd.contains(&1) && odd.contains(&3));
//!
//! let names = Collect::new(&source)
//!     .filter(|n: &i32| *n != 2)
//!     .map(|n: &i32| n.to_string())
//!     .into_vec()
//!     .unwrap();
//! assert_eq!(names, vec!["1", "3", "4"]);
//! ```

#[macro_use]
mod macros;

mod collect;
mod factories;
pub mod operator;

pub use collect::Collect;
pub use factories::*;

// Core types
pub use collectforge_core::{
    traversal, Argument, Bucket, CollectError, ListMultimap, Multimap, OrderedMap, OrderedSet,
    PassOptions, Result, SetMultimap, Sink, SortedSetMultimap, Source, Traversal,
};

// Configuration
pub use collectforge_config::{CollectConfig, ConfigError};

pub mod prelude {
    pub use super::operator::{Mapping, Predicate};
    pub use super::{
        boxed_slices, deques, index_maps, index_sets, linked_lists, list_multimaps, lists, maps,
        set_multimaps, sets, sorted_maps, sorted_set_multimaps, sorted_sets,
    };
    pub use super::{Collect, CollectConfig, CollectError, PassOptions, Source, Traversal};
}
