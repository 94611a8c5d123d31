//! Configuration for the recasing engine.
//!
//! All configuration is explicit and immutable once the engine is built:
//! the skip set and limits are plain values passed in, never process-wide
//! mutable state.

use std::path::Path;

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::errors::{RecaseError, Result};
use crate::rename::budget::DEFAULT_MAX_RENAMES;
use crate::rename::uniqueness::DEFAULT_MAX_ATTEMPTS;

/// Abbreviations that ship enabled even with an empty user configuration.
static BUILTIN_SKIPS: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["AX", "DTO"]);

/// Set of canonical abbreviation runs exempt from flagging.
///
/// Lookups are case-sensitive against the exact canonical run (`"URL"`,
/// never `"Url"`). The analysis core only reads this set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipSet {
    entries: IndexSet<String>,
}

impl SkipSet {
    /// Creates an empty skip set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a skip set holding only the built-in entries.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_SKIPS.iter().copied())
    }

    /// Creates a skip set from arbitrary entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds one entry, returning `self` for chaining at build time.
    #[must_use]
    pub fn with(mut self, entry: impl Into<String>) -> Self {
        self.entries.insert(entry.into());
        self
    }

    /// Whether `run` is exempt from flagging.
    #[must_use]
    pub fn contains(&self, run: &str) -> bool {
        self.entries.contains(run)
    }

    /// Number of configured entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Configuration for the recasing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecaseConfig {
    /// Abbreviations to skip, checked against canonical uppercase runs
    pub abbreviations_to_skip: Vec<String>,
    /// Merge the built-in entries beneath the configured ones
    pub include_builtin_skips: bool,
    /// Upper bound on numeric-suffix probes during uniqueness resolution
    pub max_suffix_attempts: usize,
    /// Maximum number of fixes auto-applied in one batch pass
    pub max_renames_per_batch: usize,
}

impl Default for RecaseConfig {
    fn default() -> Self {
        Self {
            abbreviations_to_skip: Vec::new(),
            include_builtin_skips: true,
            max_suffix_attempts: DEFAULT_MAX_ATTEMPTS,
            max_renames_per_batch: DEFAULT_MAX_RENAMES,
        }
    }
}

impl RecaseConfig {
    /// Builds the effective skip set: configured entries, plus the built-in
    /// ones unless disabled.
    #[must_use]
    pub fn skip_set(&self) -> SkipSet {
        let mut set = if self.include_builtin_skips {
            SkipSet::builtin()
        } else {
            SkipSet::new()
        };
        for entry in &self.abbreviations_to_skip {
            set = set.with(entry.clone());
        }
        set
    }

    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a YAML configuration file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            RecaseError::io(format!("failed to read config {}", path.display()), err)
        })?;
        Self::from_yaml_str(&text)
    }

    /// Checks limits for sanity.
    pub fn validate(&self) -> Result<()> {
        if self.max_suffix_attempts == 0 {
            return Err(RecaseError::config_field(
                "must be at least 1",
                "max_suffix_attempts",
            ));
        }
        Ok(())
    }
}
