//! Context-sensitive recasing of matched abbreviation runs.
//!
//! The transformer walks the spans left to right, copying literal gaps
//! verbatim and replacing each run with its recased word. The result is
//! always assembled from the original characters plus at most one `_`
//! prefix; it is never shorter than the input.
//!
//! Casing depends on where the run sits:
//!
//! - A **word-initial** run (position zero, or right after `_` or a digit)
//!   becomes a PascalCase word. Position-zero runs additionally follow the
//!   declaration kind: parameters, locals, and fields start lowercase, and
//!   private fields adopt the `_camelCase` convention when the rename
//!   yields a multi-word name. A run that stops short of the identifier's
//!   end ends with the capital that starts the next word.
//! - A **mid-word** run (right after a lowercase letter) merges into the
//!   word it continues: at the end of the identifier its final capital
//!   stands as its own trailing word (`abcDE` becomes `abcdE`), otherwise
//!   the run's first capital starts the next word and the rest is absorbed
//!   lowercase (`…CapsCCharacters` becomes `…CapsCcharacters`).
//! - In either case a run that begins with digits uppercases its first
//!   letter after the digits; a digit boundary starts a new word.

use crate::core::context::{Accessibility, DeclarationContext};
use crate::detectors::abbreviation::AbbreviationSpan;

/// Rewrites identifiers by recasing their abbreviation spans.
#[derive(Debug, Default, Clone, Copy)]
pub struct CasingTransformer;

impl CasingTransformer {
    /// Creates a transformer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reassembles `identifier` with every span replaced by its recased
    /// word. Pure and deterministic; spans that fall outside the identifier
    /// or overlap a previous span are ignored rather than panicking.
    #[must_use]
    pub fn transform(
        &self,
        identifier: &str,
        spans: &[AbbreviationSpan],
        context: DeclarationContext,
        accessibility: Accessibility,
    ) -> String {
        let chars: Vec<char> = identifier.chars().collect();
        let mut out = String::with_capacity(identifier.len() + 1);
        let mut needs_prefix = false;
        let mut cursor = 0usize;

        for span in spans {
            if span.start < cursor || span.end() > chars.len() || span.length == 0 {
                continue;
            }
            out.extend(&chars[cursor..span.start]);
            out.extend(recase_span(
                &chars,
                span,
                context,
                accessibility,
                &mut needs_prefix,
            ));
            cursor = span.end();
        }
        out.extend(&chars[cursor..]);

        if needs_prefix {
            out.insert(0, '_');
        }
        out
    }
}

/// Recases one span into its replacement word.
fn recase_span(
    chars: &[char],
    span: &AbbreviationSpan,
    context: DeclarationContext,
    accessibility: Accessibility,
    needs_prefix: &mut bool,
) -> Vec<char> {
    let len = chars.len();
    let start = span.start;
    let end = span.end();
    let mut word: Vec<char> = chars[start..end]
        .iter()
        .map(char::to_ascii_lowercase)
        .collect();
    let last = word.len() - 1;

    let word_initial = start == 0 || !chars[start - 1].is_ascii_lowercase();

    if word_initial {
        upper_at(&mut word, 0);

        // A run right after the leading underscore keeps camelCase going.
        if start == 1 && chars[0] == '_' {
            lower_at(&mut word, 0);
        }

        if start == 0 {
            match context {
                DeclarationContext::Parameter | DeclarationContext::LocalVariable => {
                    lower_at(&mut word, 0);
                }
                DeclarationContext::Field => {
                    lower_at(&mut word, 0);
                    // The _camelCase field convention is only adopted when
                    // the rename produces a multi-word name: at least two
                    // characters must follow the run.
                    if accessibility.is_private_or_unspecified() && len - end >= 2 {
                        *needs_prefix = true;
                    }
                }
                DeclarationContext::Interface if chars[start] == 'I' => {
                    // Keep the I + PascalCase interface shape.
                    upper_at(&mut word, 1);
                }
                _ => {}
            }
        }

        if let Some(letter) = first_letter_after_digits(&word) {
            upper_at(&mut word, letter);
        }
        if end < len {
            // The run's last capital starts the word that follows.
            upper_at(&mut word, last);
        }
    } else if let Some(letter) = first_letter_after_digits(&word) {
        upper_at(&mut word, letter);
        if end < len {
            upper_at(&mut word, last);
        }
    } else if word.iter().any(char::is_ascii_digit) {
        // Letters-then-digits run continuing a word: the digit boundary
        // already separates words, so keep the PascalCase shape.
        upper_at(&mut word, 0);
        if end < len {
            upper_at(&mut word, last);
        }
    } else if end == len {
        // The final capital stands as its own trailing word.
        upper_at(&mut word, last);
    } else {
        // The run's first capital starts the next word; the rest is
        // absorbed into it lowercase.
        upper_at(&mut word, 0);
    }

    word
}

/// Index of the first letter in a run that begins with digits.
fn first_letter_after_digits(word: &[char]) -> Option<usize> {
    if !word.first().is_some_and(char::is_ascii_digit) {
        return None;
    }
    word.iter().position(char::is_ascii_alphabetic)
}

fn upper_at(word: &mut [char], index: usize) {
    if let Some(c) = word.get_mut(index) {
        *c = c.to_ascii_uppercase();
    }
}

fn lower_at(word: &mut [char], index: usize) {
    if let Some(c) = word.get_mut(index) {
        *c = c.to_ascii_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SkipSet;
    use crate::detectors::abbreviation::AbbreviationMatcher;

    fn recase(identifier: &str, context: DeclarationContext, accessibility: Accessibility) -> String {
        let spans = AbbreviationMatcher::new().match_identifier(identifier, context, &SkipSet::new());
        CasingTransformer::new().transform(identifier, &spans, context, accessibility)
    }

    #[test]
    fn test_type_name_keeps_carried_capital() {
        assert_eq!(
            recase("TYPEname", DeclarationContext::Type, Accessibility::NotApplicable),
            "TypEname"
        );
    }

    #[test]
    fn test_private_field_gains_underscore_prefix() {
        assert_eq!(
            recase("SOMEVar", DeclarationContext::Field, Accessibility::Private),
            "_someVar"
        );
    }

    #[test]
    fn test_short_tail_field_stays_bare() {
        // Only one character follows the run, so no underscore convention.
        assert_eq!(
            recase("ABCd", DeclarationContext::Field, Accessibility::Private),
            "abCd"
        );
    }

    #[test]
    fn test_trailing_run_after_lowercase() {
        assert_eq!(
            recase("abcDE", DeclarationContext::Field, Accessibility::Private),
            "abcdE"
        );
    }

    #[test]
    fn test_mid_word_double_capital() {
        assert_eq!(
            recase(
                "StdNameWithTwoCapsCCharacters",
                DeclarationContext::Field,
                Accessibility::NotApplicable
            ),
            "StdNameWithTwoCapsCcharacters"
        );
    }

    #[test]
    fn test_public_field_keeps_first_letter_lowercase_without_prefix() {
        assert_eq!(
            recase("SOMEVar", DeclarationContext::Field, Accessibility::Public),
            "someVar"
        );
    }

    #[test]
    fn test_parameter_and_local_are_camel_case() {
        assert_eq!(
            recase("ABCParam", DeclarationContext::Parameter, Accessibility::NotApplicable),
            "abcParam"
        );
        assert_eq!(
            recase("XMLNode", DeclarationContext::LocalVariable, Accessibility::NotApplicable),
            "xmlNode"
        );
    }

    #[test]
    fn test_method_and_enum_member_are_pascal_case() {
        assert_eq!(
            recase("HTTPGet", DeclarationContext::Method, Accessibility::Public),
            "HttpGet"
        );
        assert_eq!(
            recase("RGBRed", DeclarationContext::EnumMember, Accessibility::NotApplicable),
            "RgbRed"
        );
    }

    #[test]
    fn test_underscore_prefixed_field_keeps_camel_continuity() {
        assert_eq!(
            recase("_DEFVal", DeclarationContext::Field, Accessibility::Private),
            "_defVal"
        );
    }

    #[test]
    fn test_digit_boundary_recapitalization() {
        assert_eq!(
            recase("Name3DD", DeclarationContext::Field, Accessibility::Private),
            "Name3Dd"
        );
        assert_eq!(
            recase("DX3name", DeclarationContext::Type, Accessibility::NotApplicable),
            "Dx3name"
        );
        assert_eq!(
            recase("Name3DS1", DeclarationContext::Field, Accessibility::Private),
            "Name3Ds1"
        );
    }

    #[test]
    fn test_mixed_run_identifier() {
        assert_eq!(
            recase(
                "Name773DB33TFTname222DXS",
                DeclarationContext::Field,
                Accessibility::Private
            ),
            "Name773Db33TfTname222Dxs"
        );
    }

    #[test]
    fn test_all_caps_identifier() {
        assert_eq!(
            recase("NAME", DeclarationContext::Type, Accessibility::NotApplicable),
            "Name"
        );
        assert_eq!(
            recase("NAME", DeclarationContext::Field, Accessibility::Private),
            "name"
        );
    }

    #[test]
    fn test_interface_second_character_rule() {
        // Spans are caller-suppliable, so a span starting at a leading I
        // still recases into the I + PascalCase shape.
        let span = AbbreviationSpan {
            start: 0,
            length: 4,
            text: "IDEA".to_string(),
        };
        let out = CasingTransformer::new().transform(
            "IDEA",
            &[span],
            DeclarationContext::Interface,
            Accessibility::NotApplicable,
        );
        assert_eq!(out, "IDea");
    }

    #[test]
    fn test_empty_span_list_is_identity() {
        let out = CasingTransformer::new().transform(
            "whatever",
            &[],
            DeclarationContext::Type,
            Accessibility::NotApplicable,
        );
        assert_eq!(out, "whatever");
    }

    #[test]
    fn test_out_of_range_spans_are_ignored() {
        let bogus = AbbreviationSpan {
            start: 10,
            length: 5,
            text: "XXXXX".to_string(),
        };
        let out = CasingTransformer::new().transform(
            "abc",
            &[bogus],
            DeclarationContext::Type,
            Accessibility::NotApplicable,
        );
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_output_never_shorter_than_input() {
        for (name, context) in [
            ("TYPEname", DeclarationContext::Type),
            ("SOMEVar", DeclarationContext::Field),
            ("abcDE", DeclarationContext::Field),
            ("Name773DB33TFTname222DXS", DeclarationContext::Field),
        ] {
            let out = recase(name, context, Accessibility::Private);
            assert!(out.len() >= name.len(), "{name} shrank to {out}");
        }
    }
}
