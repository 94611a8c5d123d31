//! # recase-rs: Abbreviation-Aware Identifier Recasing
//!
//! A Rust engine that detects abbreviation-like runs of capital letters in
//! source-code identifiers and rewrites them into normalized word casing,
//! while guaranteeing the rewritten name does not collide with sibling names
//! in scope. It provides:
//!
//! - **Abbreviation detection**: an explicit scanner over six ordered match
//!   rules, with an interface `I`-prefix exception and a configurable skip
//!   list checked against canonical uppercase runs
//! - **Context-sensitive recasing**: per-declaration-kind casing rules
//!   (PascalCase types, camelCase parameters and locals, `_camelCase`
//!   private fields) with digit- and word-boundary recapitalization
//! - **Uniqueness resolution**: numeric-suffix probing against a
//!   caller-supplied scope lookup, with a bounded retry budget
//! - **Batch processing**: a parallel pass over many identifiers sharing one
//!   atomic rename budget
//!
//! Parsing, symbol lookup, and edit application are external collaborators:
//! the engine only decides what a name should become and whether that name
//! is locally safe to use.
//!
//! ## Quick Start
//!
//! ```rust
//! use recase_rs::{Accessibility, DeclarationContext, RecaseConfig, RecaseEngine};
//!
//! let engine = RecaseEngine::new(RecaseConfig::default());
//! let renamed = engine
//!     .compute_rename(
//!         "TYPEname",
//!         DeclarationContext::Type,
//!         Accessibility::NotApplicable,
//!         |_| false,
//!     )
//!     .unwrap();
//! assert_eq!(renamed.as_deref(), Some("TypEname"));
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core data model and configuration
pub mod core {
    //! Core data model, configuration, and error types.

    pub mod config;
    pub mod context;
    pub mod errors;
}

// Detection of abbreviation runs
pub mod detectors {
    //! Identifier scanning and abbreviation-run detection.

    pub mod abbreviation;
}

// Rename construction and validation
pub mod rename {
    //! Recasing, collision handling, and batch budgeting.

    pub mod budget;
    pub mod casing;
    pub mod uniqueness;
}

// Public API and engine interface
pub mod api {
    //! High-level engine interface.

    pub mod engine;
}

// Re-export primary types for convenience
pub use crate::api::engine::{BatchOutcome, IdentifierRequest, RecaseEngine};
pub use crate::core::config::{RecaseConfig, SkipSet};
pub use crate::core::context::{Accessibility, DeclarationContext};
pub use crate::core::errors::{RecaseError, Result};
pub use crate::detectors::abbreviation::{AbbreviationMatcher, AbbreviationSpan, SpanList};
pub use crate::rename::budget::RenameBudget;
pub use crate::rename::casing::CasingTransformer;
pub use crate::rename::uniqueness::{NameUniquenessResolver, RenameProposal};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
