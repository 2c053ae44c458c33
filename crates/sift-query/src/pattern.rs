//! Patterns produced by the query parser.

use std::fmt;

/// How a pattern appeared in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// A bare word.
    Word,
    /// A quoted phrase (the quotes are stripped, inner text preserved).
    Phrase,
}

/// A literal string to search for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// Text to search for. Never blank.
    pub text: String,
    /// Whether the text was a word or a quoted phrase.
    pub kind: PatternKind,
}

impl Pattern {
    /// Creates a word pattern.
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: PatternKind::Word,
        }
    }

    /// Creates a phrase pattern.
    pub fn phrase(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: PatternKind::Phrase,
        }
    }

    /// Returns the pattern text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if the pattern came from a quoted phrase.
    pub fn is_phrase(&self) -> bool {
        self.kind == PatternKind::Phrase
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PatternKind::Word => f.write_str(&self.text),
            PatternKind::Phrase => write!(f, "\"{}\"", self.text),
        }
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
