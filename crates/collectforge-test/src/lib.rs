//! Shared test fixtures for CollectForge crates.
//!
//! This crate provides sources and records for testing builders.
//!
//! - [`counting`] - Instrumented source recording how it was traversed
//! - [`person`] - Sample records with a few derivable keys
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! collectforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use collectforge_test::counting::CountingSource;
//! use collectforge_test::person::{people, Person};
//! ```

pub mod counting;
pub mod person;

// Re-export commonly used types at crate root for convenience
pub use counting::CountingSource;
pub use person::{people, Person};
