//! Patterns prepared for a backing store.
//!
//! A store that compares raw text cannot fold ligatures itself, so every
//! pattern is expanded into all of its ligature spellings and each spelling is
//! escaped for the store's query language. How to escape is the store's
//! business: it is supplied as a [`PatternEscaper`].

use std::collections::{BTreeMap, BTreeSet};

use sift_locale::{Locale, expand};
use sift_query::Pattern;

/// Escapes a pattern for use in a store query.
pub trait PatternEscaper {
    /// Returns `pattern` with every character the store treats specially escaped.
    fn escape(&self, pattern: &str) -> String;
}

/// Leaves patterns unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEscape;

impl PatternEscaper for NoEscape {
    fn escape(&self, pattern: &str) -> String {
        pattern.to_string()
    }
}

/// Replaces characters using a sanitize map, such as `%` → `\%` for SQL `LIKE`.
#[derive(Debug, Clone, Copy)]
pub struct SanitizeEscaper<'a> {
    /// Character replacements.
    replacements: &'a BTreeMap<char, String>,
}

impl<'a> SanitizeEscaper<'a> {
    /// Creates an escaper from a character replacement map.
    pub fn new(replacements: &'a BTreeMap<char, String>) -> Self {
        Self { replacements }
    }
}

impl PatternEscaper for SanitizeEscaper<'_> {
    fn escape(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len());
        for c in pattern.chars() {
            match self.replacements.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }
}

/// One query pattern and the spellings a store should look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageTerm {
    /// The pattern as parsed from the query.
    pub pattern: Pattern,
    /// Escaped ligature spellings of the folded pattern, sorted and deduplicated.
    pub variants: Vec<String>,
}

/// Everything a store needs to filter candidates for a query.
///
/// A store matches a record when, for every term, any variant occurs in it
/// under any of the collations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoragePlan {
    /// One entry per query pattern, in query order.
    pub terms: Vec<StorageTerm>,
    /// Collations to compare under.
    pub collations: Vec<String>,
}

impl StoragePlan {
    /// Returns true if the plan does not filter anything.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Expands and escapes every pattern.
pub fn plan(
    patterns: Vec<Pattern>,
    collations: &[String],
    locale: Locale,
    escaper: &dyn PatternEscaper,
) -> StoragePlan {
    if patterns.is_empty() {
        return StoragePlan::default();
    }

    let terms = patterns
        .into_iter()
        .map(|pattern| {
            let variants: BTreeSet<String> = expand(pattern.as_str(), locale)
                .iter()
                .map(|variant| escaper.escape(variant))
                .collect();
            StorageTerm {
                pattern,
                variants: variants.into_iter().collect(),
            }
        })
        .collect();

    StoragePlan {
        terms,
        collations: collations.to_vec(),
    }
}
