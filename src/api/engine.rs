//! High-level recasing engine.
//!
//! Composes abbreviation detection, recasing, and uniqueness resolution
//! behind one call, and offers a parallel batch
//! pass for whole-project runs. The engine holds only immutable
//! configuration, so one instance can serve any number of threads.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::core::config::{RecaseConfig, SkipSet};
use crate::core::context::{Accessibility, DeclarationContext};
use crate::core::errors::{RecaseError, Result};
use crate::detectors::abbreviation::AbbreviationMatcher;
use crate::rename::budget::RenameBudget;
use crate::rename::casing::CasingTransformer;
use crate::rename::uniqueness::NameUniquenessResolver;

/// One identifier submitted to a batch pass, together with the sibling
/// names the host resolved for its scope.
#[derive(Debug, Clone)]
pub struct IdentifierRequest {
    /// Raw identifier text
    pub text: String,
    /// Declaration kind of the identifier
    pub context: DeclarationContext,
    /// Declared accessibility, where one applies
    pub accessibility: Accessibility,
    /// Names already taken in the declaration's scope
    pub scope_sibling_names: HashSet<String>,
}

impl IdentifierRequest {
    /// Creates a request with an empty sibling set.
    pub fn new(
        text: impl Into<String>,
        context: DeclarationContext,
        accessibility: Accessibility,
    ) -> Self {
        Self {
            text: text.into(),
            context,
            accessibility,
            scope_sibling_names: HashSet::new(),
        }
    }

    /// Replaces the sibling-name set.
    #[must_use]
    pub fn with_siblings<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope_sibling_names = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Outcome of a batch pass.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// `(original, replacement)` pairs, in input order
    pub renames: Vec<(String, String)>,
    /// Fixes withheld because the batch budget ran out
    pub withheld: usize,
    /// Identifiers whose uniqueness resolution failed
    pub failures: Vec<(String, RecaseError)>,
}

/// The composed recasing pipeline.
pub struct RecaseEngine {
    config: RecaseConfig,
    skip: SkipSet,
    matcher: AbbreviationMatcher,
    transformer: CasingTransformer,
    resolver: NameUniquenessResolver,
}

impl RecaseEngine {
    /// Creates an engine from explicit configuration.
    #[must_use]
    pub fn new(config: RecaseConfig) -> Self {
        let skip = config.skip_set();
        let resolver = NameUniquenessResolver::new(config.max_suffix_attempts);
        Self {
            config,
            skip,
            matcher: AbbreviationMatcher::new(),
            transformer: CasingTransformer::new(),
            resolver,
        }
    }

    /// Creates an engine with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RecaseConfig::default())
    }

    /// The configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &RecaseConfig {
        &self.config
    }

    /// The effective skip set.
    #[must_use]
    pub fn skip_set(&self) -> &SkipSet {
        &self.skip
    }

    /// Computes the replacement for `identifier`, or `None` when the
    /// identifier is already compliant. `has_conflict` answers whether a
    /// probed name is already taken in the declaration's scope.
    ///
    /// # Errors
    ///
    /// [`RecaseError::Resolution`] when uniqueness resolution exhausts its
    /// retry bound. A compliant or empty identifier is `Ok(None)`, never an
    /// error.
    pub fn compute_rename<F>(
        &self,
        identifier: &str,
        context: DeclarationContext,
        accessibility: Accessibility,
        has_conflict: F,
    ) -> Result<Option<String>>
    where
        F: FnMut(&str) -> bool,
    {
        if identifier.is_empty() {
            return Ok(None);
        }

        let spans = self.matcher.match_identifier(identifier, context, &self.skip);
        if spans.is_empty() {
            trace!(identifier, "identifier is compliant");
            return Ok(None);
        }

        let candidate = self
            .transformer
            .transform(identifier, &spans, context, accessibility);
        if candidate == identifier {
            // Flagged runs whose rewrite is the identity need no rename.
            trace!(identifier, "recasing is the identity");
            return Ok(None);
        }

        let final_name = self.resolver.resolve(&candidate, context, has_conflict)?;
        debug!(
            identifier,
            replacement = %final_name,
            spans = spans.len(),
            "rename computed"
        );
        Ok(Some(final_name))
    }

    /// Runs [`RecaseEngine::compute_rename`] over a whole batch in
    /// parallel, charging each accepted proposal against `budget`.
    ///
    /// Proposals are charged in input order once all workers finish, so the
    /// set of withheld fixes is deterministic for a given input order.
    #[must_use]
    pub fn process_batch(
        &self,
        requests: &[IdentifierRequest],
        budget: &RenameBudget,
    ) -> BatchOutcome {
        let results: Vec<(String, Result<Option<String>>)> = requests
            .par_iter()
            .map(|request| {
                let outcome = self.compute_rename(
                    &request.text,
                    request.context,
                    request.accessibility,
                    |name| request.scope_sibling_names.contains(name),
                );
                (request.text.clone(), outcome)
            })
            .collect();

        let mut batch = BatchOutcome::default();
        for (text, outcome) in results {
            match outcome {
                Ok(Some(replacement)) => {
                    if budget.try_acquire() {
                        batch.renames.push((text, replacement));
                    } else {
                        batch.withheld += 1;
                    }
                }
                Ok(None) => {}
                Err(err) => batch.failures.push((text, err)),
            }
        }

        info!(
            renames = batch.renames.len(),
            withheld = batch.withheld,
            failures = batch.failures.len(),
            "batch pass finished"
        );
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_conflict(_: &str) -> bool {
        false
    }

    #[test]
    fn test_compliant_identifier_yields_no_proposal() {
        let engine = RecaseEngine::with_defaults();
        for name in ["someVar", "_someVar", "PascalName", ""] {
            let result = engine
                .compute_rename(
                    name,
                    DeclarationContext::Field,
                    Accessibility::Private,
                    no_conflict,
                )
                .unwrap();
            assert_eq!(result, None, "unexpected proposal for {name:?}");
        }
    }

    #[test]
    fn test_type_rename() {
        let engine = RecaseEngine::with_defaults();
        let result = engine
            .compute_rename(
                "TYPEname",
                DeclarationContext::Type,
                Accessibility::NotApplicable,
                no_conflict,
            )
            .unwrap();
        assert_eq!(result.as_deref(), Some("TypEname"));
    }

    #[test]
    fn test_private_field_conflict_gains_suffix() {
        let engine = RecaseEngine::with_defaults();
        let siblings: HashSet<&str> = ["_someVar"].into_iter().collect();

        let result = engine
            .compute_rename(
                "SOMEVar",
                DeclarationContext::Field,
                Accessibility::Private,
                |name| siblings.contains(name),
            )
            .unwrap();
        assert_eq!(result.as_deref(), Some("_someVar1"));

        // Without the conflicting sibling the bare name is used.
        let result = engine
            .compute_rename(
                "SOMEVar",
                DeclarationContext::Field,
                Accessibility::Private,
                no_conflict,
            )
            .unwrap();
        assert_eq!(result.as_deref(), Some("_someVar"));
    }

    #[test]
    fn test_interface_with_leading_i_is_preserved() {
        let engine = RecaseEngine::with_defaults();
        let result = engine
            .compute_rename(
                "IDDeal",
                DeclarationContext::Interface,
                Accessibility::NotApplicable,
                no_conflict,
            )
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_namespace_skips_conflict_probing() {
        let engine = RecaseEngine::with_defaults();
        // A scope that rejects every name would loop a member rename into
        // suffixes; a namespace takes the candidate as-is.
        let result = engine
            .compute_rename(
                "NAMESpace",
                DeclarationContext::Namespace,
                Accessibility::NotApplicable,
                |_| true,
            )
            .unwrap();
        assert_eq!(result.as_deref(), Some("NameSpace"));
    }

    #[test]
    fn test_skip_listed_abbreviation_is_not_renamed() {
        let engine = RecaseEngine::new(RecaseConfig {
            abbreviations_to_skip: vec!["URL".to_string()],
            ..Default::default()
        });
        let result = engine
            .compute_rename(
                "parseURL",
                DeclarationContext::Method,
                Accessibility::Public,
                no_conflict,
            )
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_resolution_failure_is_distinct_from_no_proposal() {
        let engine = RecaseEngine::new(RecaseConfig {
            max_suffix_attempts: 4,
            ..Default::default()
        });
        let err = engine
            .compute_rename(
                "SOMEVar",
                DeclarationContext::Field,
                Accessibility::Private,
                |_| true,
            )
            .unwrap_err();
        assert!(matches!(err, RecaseError::Resolution { .. }));
    }

    #[test]
    fn test_batch_pass_charges_budget_in_order() {
        let engine = RecaseEngine::with_defaults();
        let requests = vec![
            IdentifierRequest::new(
                "TYPEname",
                DeclarationContext::Type,
                Accessibility::NotApplicable,
            ),
            IdentifierRequest::new("fineName", DeclarationContext::Field, Accessibility::Private),
            IdentifierRequest::new("SOMEVar", DeclarationContext::Field, Accessibility::Private)
                .with_siblings(["_someVar"]),
            IdentifierRequest::new("abcDE", DeclarationContext::Field, Accessibility::Private),
        ];

        let budget = RenameBudget::new(2);
        let outcome = engine.process_batch(&requests, &budget);

        assert_eq!(
            outcome.renames,
            vec![
                ("TYPEname".to_string(), "TypEname".to_string()),
                ("SOMEVar".to_string(), "_someVar1".to_string()),
            ]
        );
        assert_eq!(outcome.withheld, 1);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn test_batch_pass_collects_failures() {
        let engine = RecaseEngine::new(RecaseConfig {
            max_suffix_attempts: 2,
            ..Default::default()
        });
        let mut request = IdentifierRequest::new(
            "ABCd",
            DeclarationContext::Field,
            Accessibility::Private,
        );
        request.scope_sibling_names = ["abCd", "abCd1", "abCd2"]
            .into_iter()
            .map(String::from)
            .collect();

        let budget = RenameBudget::default();
        let outcome = engine.process_batch(&[request], &budget);
        assert!(outcome.renames.is_empty());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, "ABCd");
    }
}
