//! Ligature expansion and location.
//!
//! Folding turns `æ` into `ae`, so a folded pattern can no longer match text that
//! spells the word with the ligature. [`expand`] produces every spelling of a
//! pattern in which a known two-letter sequence is written as a ligature instead,
//! for use by a backing store that compares raw text.
//!
//! [`find_ligatures`] records where ligatures occur in a text. Each of them makes
//! the folded text one character longer than the original, which the snippet
//! engine uses to map match coordinates back.

use std::collections::{BTreeMap, BTreeSet};

use unicode_normalization::UnicodeNormalization;

use crate::{
    locale::{Locale, LocaleRules},
    transliterate::fold,
};

/// Returns every spelling equivalent to `pattern` under `locale`.
///
/// The pattern is composed to NFC and folded first. Each two-letter sequence
/// that the locale knows as a ligature is replaced, in all combinations, by each
/// ligature it may stand for. The folded pattern itself is always part of the
/// result.
///
/// Overlapping pairs are all considered: a replaced pair does not stop the pair
/// starting on its second letter from being tried as well, so `sss` in German
/// gives `sss`, `ßs` and `sß`.
///
/// ```
/// use sift_locale::{Locale, expand};
///
/// let variants = expand("caesar", Locale::French);
/// assert!(variants.contains("cæsar"));
/// assert!(variants.contains("caesar"));
/// ```
pub fn expand(pattern: &str, locale: Locale) -> BTreeSet<String> {
    let rules = locale.rules();
    let composed: String = pattern.nfc().collect();
    let folded: Vec<char> = fold(&composed, locale).chars().collect();

    let mut variants = BTreeSet::new();
    // Each candidate carries the position its next scan starts from. Every
    // branch moves that cursor forward by at least one, so the walk terminates.
    let mut pending = vec![(folded, 0)];

    while let Some((chars, cursor)) = pending.pop() {
        let Some((at, ligatures)) = next_pair(&chars, cursor, rules) else {
            variants.insert(chars.into_iter().collect());
            continue;
        };

        for &ligature in ligatures {
            let mut variant = Vec::with_capacity(chars.len() - 1);
            variant.extend_from_slice(&chars[..at]);
            variant.push(ligature);
            variant.extend_from_slice(&chars[at + 2..]);
            pending.push((variant, at + 1));
        }

        // Keep the pair spelled out and look for the next one.
        pending.push((chars, at + 1));
    }

    variants
}

/// Finds the earliest ligature pair at or after `cursor`.
fn next_pair(
    chars: &[char],
    cursor: usize,
    rules: &LocaleRules,
) -> Option<(usize, &'static [char])> {
    chars
        .windows(2)
        .enumerate()
        .skip(cursor)
        .find_map(|(at, pair)| rules.ligatures_for_pair(pair[0], pair[1]).map(|l| (at, l)))
}

/// Returns the position of every ligature character in `text`.
///
/// Positions are character indices into `text`.
pub fn find_ligatures(text: &str, locale: Locale) -> BTreeMap<usize, char> {
    let rules = locale.rules();
    text.chars()
        .enumerate()
        .filter(|&(_, c)| rules.is_ligature(c))
        .collect()
}
