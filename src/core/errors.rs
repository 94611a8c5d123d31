//! Error types for the recase-rs library.
//!
//! Structured error types that preserve context across the detection,
//! recasing, and resolution stages. A failed uniqueness resolution is kept
//! distinct from "no rename needed", which is not an error at all.

use std::io;

use thiserror::Error;

/// Main result type for recase operations.
pub type Result<T> = std::result::Result<T, RecaseError>;

/// Comprehensive error type for all recase operations.
#[derive(Error, Debug)]
pub enum RecaseError {
    /// I/O related errors (configuration file access)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being processed
        format: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Uniqueness resolution exhausted its retry bound
    #[error("rename resolution for '{base}' gave up after {attempts} attempts")]
    Resolution {
        /// Candidate name the suffix probing started from
        base: String,
        /// Number of probes performed before giving up
        attempts: usize,
    },
}

impl RecaseError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new resolution error
    pub fn resolution(base: impl Into<String>, attempts: usize) -> Self {
        Self::Resolution {
            base: base.into(),
            attempts,
        }
    }
}

impl From<io::Error> for RecaseError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for RecaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            format: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for RecaseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            format: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}
