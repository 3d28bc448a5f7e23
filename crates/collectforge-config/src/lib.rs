//! Configuration system for CollectForge.
//!
//! Load builder configuration from TOML or YAML to control how sources are
//! traversed and whether targets pre-allocate, without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use collectforge_config::CollectConfig;
//! use collectforge_core::Traversal;
//!
//! let config = CollectConfig::from_toml_str(r#"
//!     traversal = "sequential"
//!     reserve_capacity = false
//! "#).unwrap();
//!
//! assert_eq!(config.traversal, Traversal::Sequential);
//! assert!(!config.reserve_capacity);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use collectforge_config::CollectConfig;
//!
//! let config = CollectConfig::load("collect.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use collectforge_core::{PassOptions, Traversal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Builder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CollectConfig {
    /// How sources are walked.
    #[serde(default)]
    pub traversal: Traversal,

    /// Reserve target capacity from the source length before inserting.
    #[serde(default = "default_reserve_capacity")]
    pub reserve_capacity: bool,
}

fn default_reserve_capacity() -> bool {
    true
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            traversal: Traversal::default(),
            reserve_capacity: default_reserve_capacity(),
        }
    }
}

impl CollectConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format from its extension.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, everything else as
    /// TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the traversal strategy.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Enables or disables capacity reservation.
    pub fn with_reserve_capacity(mut self, reserve_capacity: bool) -> Self {
        self.reserve_capacity = reserve_capacity;
        self
    }

    /// Returns the per-pass options this configuration describes.
    pub fn pass_options(&self) -> PassOptions {
        PassOptions::new()
            .with_traversal(self.traversal)
            .with_reserve_capacity(self.reserve_capacity)
    }
}

impl From<CollectConfig> for PassOptions {
    fn from(config: CollectConfig) -> Self {
        config.pass_options()
    }
}
