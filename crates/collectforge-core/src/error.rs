//! Error types for CollectForge

use std::fmt;

use thiserror::Error;

/// Main error type for collection builder operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectError {
    /// A required argument was not supplied before the build was requested.
    #[error("Invalid argument: {argument} must not be absent")]
    InvalidArgument { argument: Argument },
}

impl CollectError {
    /// Creates an error reporting the given missing argument.
    pub fn missing(argument: Argument) -> Self {
        CollectError::InvalidArgument { argument }
    }

    /// Returns the argument this error is about.
    pub fn argument(&self) -> Argument {
        match self {
            CollectError::InvalidArgument { argument } => *argument,
        }
    }
}

/// Names an argument of a builder operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Argument {
    Source,
    Predicate,
    Function,
    KeyFunction,
    ValueFunction,
    Comparator,
}

impl Argument {
    /// Returns the argument name as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Argument::Source => "source",
            Argument::Predicate => "predicate",
            Argument::Function => "function",
            Argument::KeyFunction => "key_function",
            Argument::ValueFunction => "value_function",
            Argument::Comparator => "comparator",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result type alias for collection builder operations
pub type Result<T> = std::result::Result<T, CollectError>;
