//! Query parser.
//!
//! Splits a query string into patterns. Double quotes alternate between unquoted
//! and quoted segments: quoted segments become one phrase each, unquoted
//! segments are split on whitespace into words. Blank patterns are dropped and
//! the order of appearance is preserved.

use std::{iter::Peekable, str::Chars};

use crate::pattern::Pattern;

/// Splits a query string into patterns.
struct Parser<'a> {
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
    /// Patterns collected so far.
    patterns: Vec<Pattern>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            patterns: Vec::new(),
        }
    }

    /// Consumes the whole input.
    fn parse(mut self) -> Vec<Pattern> {
        while self.chars.peek().is_some() {
            self.read_words();
            if self.chars.next_if_eq(&'"').is_some() {
                self.read_phrase();
            }
        }
        self.patterns
    }

    /// Reads unquoted words up to the next quote or the end of input.
    fn read_words(&mut self) {
        let mut word = String::new();
        while let Some(ch) = self.chars.next_if(|&ch| ch != '"') {
            if ch.is_whitespace() {
                self.push_word(&mut word);
            } else {
                word.push(ch);
            }
        }
        self.push_word(&mut word);
    }

    /// Reads a phrase up to the closing quote, or to the end of input if the
    /// quote is never closed.
    fn read_phrase(&mut self) {
        let mut content = String::new();
        for ch in self.chars.by_ref() {
            if ch == '"' {
                break;
            }
            content.push(ch);
        }

        let trimmed = content.trim();
        if !trimmed.is_empty() {
            self.patterns.push(Pattern::phrase(trimmed));
        }
    }

    /// Emits the pending word, if any, and clears the buffer.
    fn push_word(&mut self, word: &mut String) {
        if !word.is_empty() {
            self.patterns.push(Pattern::word(word.as_str()));
            word.clear();
        }
    }
}

/// Parses a query string into an ordered list of patterns.
pub fn parse(query: &str) -> Vec<Pattern> {
    Parser::new(query).parse()
}

/// Parses a query string and returns only the pattern texts.
pub fn parse_strings(query: &str) -> Vec<String> {
    parse(query).into_iter().map(|pattern| pattern.text).collect()
}
