//! Locating matches in text and rendering highlighted snippets.
//!
//! The pipeline runs once per text:
//!
//! 1. Compose the text and every pattern to NFC, then fold and upper-case them
//!    ([`sift_locale::fold_upper`])
//! 2. Find every occurrence in the folded text ([`find_all`])
//! 3. Map the occurrences back to the original text ([`correct`]) and pull
//!    trailing combining marks into them ([`extend_over_marks`])
//! 4. Render, either the whole text or windows around grouped matches
//!
//! Plain text is rendered whole. Markup-bearing text is stripped of its tags
//! first, then matches are grouped ([`merge`]), windows are sized around each
//! group ([`chunk_groups`]), and only the windows are rendered.
//!
//! # Example
//!
//! ```
//! use sift_config::Settings;
//! use sift_locale::Locale;
//! use sift_snippet::{TextKind, highlight};
//!
//! let settings = Settings::default();
//! let out = highlight("Une crème brûlée", &["creme"], TextKind::Plain, &settings, Locale::DEFAULT);
//! assert_eq!(out.as_deref(), Some("Une <mark>crème</mark> brûlée"));
//! ```

#![warn(missing_docs)]

mod chunk;
mod correct;
mod find;
mod group;
mod markup;
mod render;

pub use chunk::{
    Chunk, MAX_MERGE_PASSES, chunk_for, chunk_groups, chunk_with_context, context_length,
};
pub use correct::{correct, correct_with, extend_over_marks};
pub use find::{Match, MatchMap, find_all};
pub use group::{MatchGroup, merge};
pub use markup::strip_markup;
pub use render::{render_chunks, render_plain};
use sift_config::Settings;
use sift_locale::{Locale, fold_upper};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// How a text should be searched and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextKind {
    /// Short text, rendered whole.
    #[default]
    Plain,
    /// Long or HTML-like text, stripped and rendered as windows around matches.
    Markup,
}

/// Finds `patterns` in `text` and returns its match map in `text`'s
/// character coordinates.
///
/// Patterns are composed to NFC before folding. `text` is searched as given,
/// so callers holding decomposed text should compose it first, as
/// [`highlight`] does.
pub fn locate<P: AsRef<str>>(text: &str, patterns: &[P], locale: Locale) -> MatchMap {
    let folded_text = fold_upper(text, locale);
    let folded_patterns: Vec<String> = patterns
        .iter()
        .map(|pattern| {
            let composed: String = pattern.as_ref().nfc().collect();
            fold_upper(&composed, locale)
        })
        .collect();
    let found = find_all(&folded_text, &folded_patterns);
    let chars: Vec<char> = text.chars().collect();
    extend_over_marks(&correct(&found, text, locale), &chars)
}

/// Highlights `patterns` in `text`.
///
/// Returns `None` when nothing matches, so callers can fall back to the
/// unhighlighted text. The output carries the text in NFC.
pub fn highlight<P: AsRef<str>>(
    text: &str,
    patterns: &[P],
    kind: TextKind,
    settings: &Settings,
    locale: Locale,
) -> Option<String> {
    let text: String = match kind {
        TextKind::Plain => text.nfc().collect(),
        TextKind::Markup => strip_markup(text).nfc().collect(),
    };
    let text = text.as_str();

    let matches = locate(text, patterns, locale);
    debug!(
        ?kind,
        patterns = patterns.len(),
        matches = matches.len(),
        "located matches"
    );
    if matches.is_empty() {
        return None;
    }

    let chars: Vec<char> = text.chars().collect();
    match kind {
        TextKind::Plain => {
            let matches: Vec<Match> = matches.into_iter().map(Match::from).collect();
            render_plain(&chars, &matches, &settings.markup)
        }
        TextKind::Markup => {
            let chunks = chunk_groups(merge(&matches), &chars, &settings.context);
            render_chunks(&chars, &chunks, &settings.markup)
        }
    }
}
