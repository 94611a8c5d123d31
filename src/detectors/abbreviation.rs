//! Abbreviation-run detection inside identifiers.
//!
//! The matcher walks an identifier once, left to right, testing a fixed set
//! of ordered match rules at each position. The first rule that matches at a
//! position wins, matches never overlap, and scanning resumes past the end
//! of each match. This is the same match set the regex
//! `\d+[A-Z]{2,}$|\d+[A-Z]{3,}|[A-Z]{2,}$|[A-Z]{2,}\d+|[A-Z]{3,}` produces
//! under ordered alternation, expressed as named rules so the precedence and
//! the boundary handling stay testable, plus one extra mid-word rule for
//! two-capital runs sandwiched between lowercase letters.
//!
//! Spans carry character indices, so identifiers containing multibyte
//! characters never split a claimed boundary character.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::config::SkipSet;
use crate::core::context::DeclarationContext;

/// A detected abbreviation-like run inside an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbbreviationSpan {
    /// Character index of the first character of the run
    pub start: usize,
    /// Number of characters in the run
    pub length: usize,
    /// The matched text, excluding any claimed boundary character
    pub text: String,
}

impl AbbreviationSpan {
    /// Character index one past the end of the run.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Ordered, non-overlapping spans for one identifier. Identifiers rarely
/// hold more than a handful of runs, so the list stays inline.
pub type SpanList = SmallVec<[AbbreviationSpan; 4]>;

/// Scans identifiers for abbreviation-like capital runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbbreviationMatcher;

impl AbbreviationMatcher {
    /// Creates a matcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the ordered abbreviation spans in `identifier`, with
    /// skip-listed runs already filtered out. An empty result means the
    /// identifier is compliant.
    #[must_use]
    pub fn match_identifier(
        &self,
        identifier: &str,
        context: DeclarationContext,
        skip: &SkipSet,
    ) -> SpanList {
        let chars: Vec<char> = identifier.chars().collect();
        let mut spans = SpanList::new();
        if chars.is_empty() {
            return spans;
        }

        // The leading 'I' of an interface name is naming convention, not an
        // abbreviation start; scanning begins after it. Runs further right
        // are still reported normally.
        let mut pos = usize::from(context == DeclarationContext::Interface && chars[0] == 'I');

        while pos < chars.len() {
            let Some(length) = match_at(&chars, pos) else {
                pos += 1;
                continue;
            };
            let span = AbbreviationSpan {
                start: pos,
                length,
                text: chars[pos..pos + length].iter().collect(),
            };
            pos += length;

            if let Some(run) = canonical_run(&chars, &span) {
                if skip.contains(&run) {
                    debug!(identifier, run = %run, "skip-listed abbreviation ignored");
                    continue;
                }
            }
            spans.push(span);
        }
        spans
    }
}

/// Tries the match rules at `pos`, returning the matched length.
///
/// Rule order is precedence order:
/// 1. digits, then two-or-more capitals ending the identifier
/// 2. digits, then three-or-more capitals
/// 3. two-or-more capitals ending the identifier
/// 4. two-or-more capitals followed by digits
/// 5. three-or-more capitals
/// 6. exactly two capitals between lowercase letters
fn match_at(chars: &[char], pos: usize) -> Option<usize> {
    let len = chars.len();

    let digits = digit_run(chars, pos);
    if digits > 0 {
        let caps = upper_run(chars, pos + digits);
        if caps >= 2 && pos + digits + caps == len {
            return Some(digits + caps);
        }
        if caps >= 3 {
            return Some(digits + caps);
        }
        return None;
    }

    let caps = upper_run(chars, pos);
    if caps >= 2 {
        if pos + caps == len {
            return Some(caps);
        }
        let trailing_digits = digit_run(chars, pos + caps);
        if trailing_digits > 0 {
            return Some(caps + trailing_digits);
        }
        if caps >= 3 {
            return Some(caps);
        }
        if caps == 2 && pos > 0 && chars[pos - 1].is_ascii_lowercase() && is_lower_at(chars, pos + 2)
        {
            return Some(2);
        }
    }
    None
}

/// Recovers the canonical uppercase run used for skip-list lookup.
///
/// A span that stops short of the identifier's end claims one extra
/// character here; the canonical run is the leftmost run of two-or-more
/// capitals in the claimed text that is not immediately followed by a
/// lowercase letter. A trailing capital that starts the next word is
/// excluded from the run, so skipping `URL` also covers `URLParser`.
fn canonical_run(chars: &[char], span: &AbbreviationSpan) -> Option<String> {
    let claimed_end = if chars.len() > span.end() {
        span.end() + 1
    } else {
        span.end()
    };
    let claimed = &chars[span.start..claimed_end];

    let mut i = 0;
    while i < claimed.len() {
        if !claimed[i].is_ascii_uppercase() {
            i += 1;
            continue;
        }
        let run = upper_run(claimed, i);
        let take = if is_lower_at(claimed, i + run) {
            run - 1
        } else {
            run
        };
        if take >= 2 {
            return Some(claimed[i..i + take].iter().collect());
        }
        i += run;
    }
    None
}

fn upper_run(chars: &[char], pos: usize) -> usize {
    chars[pos.min(chars.len())..]
        .iter()
        .take_while(|c| c.is_ascii_uppercase())
        .count()
}

fn digit_run(chars: &[char], pos: usize) -> usize {
    chars[pos.min(chars.len())..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count()
}

fn is_lower_at(chars: &[char], pos: usize) -> bool {
    chars.get(pos).is_some_and(|c| c.is_ascii_lowercase())
}
