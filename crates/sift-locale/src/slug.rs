//! URL-safe slug generation.
//!
//! The algorithm:
//! - Fold accented characters for the locale
//! - Lowercase the text
//! - Replace every run of non-alphanumeric characters with the separator
//! - Trim leading/trailing separators

use crate::{locale::Locale, transliterate::fold};

/// Converts `text` into a lowercase ASCII token sequence joined by `separator`.
///
/// Characters that survive folding as non-ASCII are treated like punctuation.
pub fn slugify(text: &str, locale: Locale, separator: &str) -> String {
    let folded = fold(text, locale);
    let mut slug = String::with_capacity(folded.len());
    let mut pending_separator = false;

    for c in folded.chars() {
        if !c.is_ascii_alphanumeric() {
            pending_separator = true;
            continue;
        }
        if pending_separator && !slug.is_empty() {
            slug.push_str(separator);
        }
        pending_separator = false;
        slug.push(c.to_ascii_lowercase());
    }

    slug
}
