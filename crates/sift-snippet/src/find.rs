//! Pattern occurrence search.

use std::collections::BTreeMap;

use aho_corasick::{AhoCorasick, MatchKind};
use tracing::warn;

/// One occurrence of a pattern, in character coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    /// Character index where the match starts.
    pub position: usize,
    /// Number of characters matched. Always positive.
    pub length: usize,
}

impl Match {
    /// Creates a match.
    pub fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// Character index just past the match.
    pub fn end(&self) -> usize {
        self.position + self.length
    }
}

impl From<(usize, usize)> for Match {
    fn from((position, length): (usize, usize)) -> Self {
        Self::new(position, length)
    }
}

/// Matches keyed by start position, holding the longest length found there.
pub type MatchMap = BTreeMap<usize, usize>;

/// Finds every occurrence of every pattern in `text`.
///
/// Occurrences may overlap, including occurrences of the same pattern. When
/// several patterns start at the same character the longest one is kept.
/// Positions and lengths count characters, not bytes. Empty patterns are ignored.
///
/// Matching is exact: fold and case-normalize both sides before calling.
pub fn find_all<P: AsRef<str>>(text: &str, patterns: &[P]) -> MatchMap {
    let patterns: Vec<&str> = patterns
        .iter()
        .map(AsRef::as_ref)
        .filter(|pattern| !pattern.is_empty())
        .collect();
    let mut matches = MatchMap::new();
    if patterns.is_empty() || text.is_empty() {
        return matches;
    }

    let automaton = match AhoCorasick::builder()
        .match_kind(MatchKind::Standard)
        .build(&patterns)
    {
        Ok(automaton) => automaton,
        Err(err) => {
            warn!(error = %err, patterns = patterns.len(), "could not build pattern matcher");
            return matches;
        }
    };

    let lengths: Vec<usize> = patterns.iter().map(|p| p.chars().count()).collect();
    let char_starts: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();

    for found in automaton.find_overlapping_iter(text) {
        // Patterns are valid UTF-8, so matches always start on a char boundary.
        let Ok(position) = char_starts.binary_search(&found.start()) else {
            continue;
        };
        let length = lengths[found.pattern().as_usize()];
        let longest = matches.entry(position).or_insert(length);
        *longest = (*longest).max(length);
    }

    matches
}
