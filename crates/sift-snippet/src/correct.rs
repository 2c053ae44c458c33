//! Mapping match coordinates from folded text back to the original text.
//!
//! Folding writes each ligature as two letters (`æ` → `ae`), so every ligature
//! before a match pushes it one character to the right in the folded text.
//! Ligatures are processed in ascending order. For a ligature at original
//! position `p`, the folded text holds its two letters at `p` and `p + 1`:
//!
//! - a match starting at `p + 1` begins on the second letter and is dropped
//! - a match starting after `p + 1` moves back by one
//! - a match covering both letters loses one character of length
//! - a match ending between the two letters is dropped
//! - a match ending at or before `p` is unchanged
//!
//! Folding also leaves combining marks that do not compose with their base
//! letter in place, so a match can end right before a mark that belongs to its
//! last letter. [`extend_over_marks`] pulls such marks into the match.

use std::collections::BTreeMap;

use sift_locale::{Locale, find_ligatures};
use unicode_normalization::char::is_combining_mark;

use crate::find::MatchMap;

/// Remaps matches found in the folded form of `original` to `original`'s
/// character coordinates.
pub fn correct(matches: &MatchMap, original: &str, locale: Locale) -> MatchMap {
    let ligatures = find_ligatures(original, locale);
    correct_with(matches, &ligatures)
}

/// Remaps matches using precomputed ligature positions.
pub fn correct_with(matches: &MatchMap, ligatures: &BTreeMap<usize, char>) -> MatchMap {
    let mut current: Vec<(usize, usize)> = matches.iter().map(|(&p, &l)| (p, l)).collect();
    for &ligature in ligatures.keys() {
        current = current
            .into_iter()
            .filter_map(|(position, length)| collapse_ligature(position, length, ligature))
            .collect();
    }
    current.into_iter().collect()
}

/// Extends every match in `matches` over the combining marks that directly
/// follow it in `text`.
pub fn extend_over_marks(matches: &MatchMap, text: &[char]) -> MatchMap {
    matches
        .iter()
        .map(|(&position, &length)| {
            let mut end = position + length;
            while text.get(end).copied().is_some_and(is_combining_mark) {
                end += 1;
            }
            (position, end - position)
        })
        .collect()
}

/// Adjusts one match for a ligature whose folded letters sit at `ligature` and
/// `ligature + 1`. Returns `None` if the match cannot be expressed without
/// splitting the ligature.
fn collapse_ligature(position: usize, length: usize, ligature: usize) -> Option<(usize, usize)> {
    let end = position + length;
    if position > ligature {
        if position == ligature + 1 {
            return None;
        }
        return Some((position - 1, length));
    }
    if end <= ligature {
        Some((position, length))
    } else if end == ligature + 1 {
        None
    } else {
        Some((position, length - 1))
    }
}
