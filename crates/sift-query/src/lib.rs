//! Search query parsing for sift.
//!
//! A query is free-form text with two kinds of patterns:
//!
//! - **Words**: `rust` - whitespace-separated terms
//! - **Phrases**: `"error handling"` - quoted text kept as one pattern
//!
//! There are no operators. A quote that is never closed turns the rest of the
//! query into a phrase.
//!
//! # Example
//!
//! ```
//! use sift_query::parse;
//!
//! let patterns = parse(r#"foo "bar baz" qux"#);
//! let texts: Vec<&str> = patterns.iter().map(|p| p.as_str()).collect();
//! assert_eq!(texts, ["foo", "bar baz", "qux"]);
//! ```

#![warn(missing_docs)]

mod parser;
mod pattern;

pub use parser::{parse, parse_strings};
pub use pattern::{Pattern, PatternKind};
