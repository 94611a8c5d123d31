//! Collision-free name selection for rename proposals.
//!
//! Scope membership is the host's knowledge: the resolver only needs a
//! predicate answering "is this name already taken here?". What counts as
//! the scope (sibling members, parameters of the enclosing method chain,
//! locals in the method body) is the caller's concern.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::context::DeclarationContext;
use crate::core::errors::{RecaseError, Result};

/// Default cap on suffix probes before resolution is reported as failed.
pub const DEFAULT_MAX_ATTEMPTS: usize = 512;

/// A proposed replacement name plus the sibling names visible in its scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameProposal {
    /// The name the transformer produced
    pub candidate_name: String,
    /// Names already taken in the declaration's scope
    pub scope_sibling_names: HashSet<String>,
}

impl RenameProposal {
    /// Creates a proposal.
    pub fn new<I, S>(candidate_name: impl Into<String>, scope_sibling_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidate_name: candidate_name.into(),
            scope_sibling_names: scope_sibling_names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Derives collision-free names by numeric-suffix probing.
#[derive(Debug, Clone, Copy)]
pub struct NameUniquenessResolver {
    max_attempts: usize,
}

impl Default for NameUniquenessResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl NameUniquenessResolver {
    /// Creates a resolver with the given probe cap.
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Returns `candidate` untouched when the scope reports no conflict,
    /// otherwise the first `candidate1`, `candidate2`, … the scope accepts.
    ///
    /// Namespace identifiers are returned as-is: namespaces are not subject
    /// to sibling-uniqueness checks.
    ///
    /// # Errors
    ///
    /// [`RecaseError::Resolution`] when every probe up to the configured cap
    /// reports a conflict.
    pub fn resolve<F>(
        &self,
        candidate: &str,
        context: DeclarationContext,
        mut has_conflict: F,
    ) -> Result<String>
    where
        F: FnMut(&str) -> bool,
    {
        if context == DeclarationContext::Namespace {
            return Ok(candidate.to_string());
        }

        let mut name = candidate.to_string();
        let mut index = 0usize;
        while has_conflict(&name) {
            index += 1;
            if index > self.max_attempts {
                return Err(RecaseError::resolution(candidate, index - 1));
            }
            name = format!("{candidate}{index}");
        }

        if index > 0 {
            debug!(candidate, resolved = %name, probes = index, "name conflict resolved by suffix");
        }
        Ok(name)
    }

    /// Resolves a [`RenameProposal`] against its own sibling-name set.
    ///
    /// # Errors
    ///
    /// Same as [`NameUniquenessResolver::resolve`].
    pub fn resolve_proposal(
        &self,
        proposal: &RenameProposal,
        context: DeclarationContext,
    ) -> Result<String> {
        self.resolve(&proposal.candidate_name, context, |name| {
            proposal.scope_sibling_names.contains(name)
        })
    }
}
