//! Snippets for nested search results.
//!
//! Callers often hold a result as a tree of records and lists with text fields
//! at the leaves. [`ResultNode`] models that tree so every field can receive
//! its snippet in one walk.

use std::collections::BTreeMap;

use sift_snippet::TextKind;
use tracing::warn;

/// Deepest level of nesting that is walked. The root is at depth 0.
pub const MAX_TREE_DEPTH: usize = 32;

/// A node of a search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultNode {
    /// A text field.
    Field {
        /// Original text.
        text: String,
        /// How the text is rendered.
        kind: TextKind,
        /// Highlighted snippet, `None` if the text did not match.
        snippet: Option<String>,
    },
    /// An ordered list of nodes.
    List(Vec<Self>),
    /// Named child nodes.
    Record(BTreeMap<String, Self>),
}

impl ResultNode {
    /// Creates a field with no snippet.
    pub fn field(text: impl Into<String>, kind: TextKind) -> Self {
        Self::Field {
            text: text.into(),
            kind,
            snippet: None,
        }
    }

    /// Returns the snippet of a field.
    pub fn snippet(&self) -> Option<&str> {
        match self {
            Self::Field { snippet, .. } => snippet.as_deref(),
            _ => None,
        }
    }

    /// Returns a child of a record.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Record(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Returns an element of a list.
    pub fn at(&self, index: usize) -> Option<&Self> {
        match self {
            Self::List(items) => items.get(index),
            _ => None,
        }
    }

    /// Sets the snippet of every field from `render`, returning how many fields
    /// received one.
    ///
    /// Nodes nested deeper than [`MAX_TREE_DEPTH`] are left untouched.
    pub fn fill_snippets<F>(&mut self, render: &mut F) -> usize
    where
        F: FnMut(&str, TextKind) -> Option<String>,
    {
        self.fill_at(render, 0)
    }

    /// Recursive step of [`Self::fill_snippets`].
    fn fill_at<F>(&mut self, render: &mut F, depth: usize) -> usize
    where
        F: FnMut(&str, TextKind) -> Option<String>,
    {
        if depth > MAX_TREE_DEPTH {
            warn!(depth, "result tree too deep, skipping subtree");
            return 0;
        }
        match self {
            Self::Field {
                text,
                kind,
                snippet,
            } => {
                *snippet = render(text.as_str(), *kind);
                usize::from(snippet.is_some())
            }
            Self::List(items) => items
                .iter_mut()
                .map(|item| item.fill_at(render, depth + 1))
                .sum(),
            Self::Record(fields) => fields
                .values_mut()
                .map(|field| field.fill_at(render, depth + 1))
                .sum(),
        }
    }
}
