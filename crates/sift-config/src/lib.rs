//! Settings for sift highlighting and snippets.
//!
//! Settings are a plain value object: context lengths for snippet windows, the
//! markup wrapped around matches and snippets, and the storage-side options
//! (collations and character sanitizing). They can be built in code or parsed
//! from TOML:
//!
//! ```toml
//! collations = ["utf8mb4_unicode_ci"]
//!
//! [context]
//! min = 20
//! max = 120
//! merge_interval = 10
//!
//! [markup]
//! match_before = "<mark>"
//! match_after = "</mark>"
//! snippet_before = ""
//! snippet_after = ""
//! snippet_between = " … "
//!
//! [sanitize]
//! "%" = "\\%"
//! ```
//!
//! Every `[context]` and `[markup]` key is required. Malformed settings are
//! reported before any search runs and are never silently replaced by defaults.

#![warn(missing_docs)]

mod error;
mod parse;
mod validate;

use std::collections::BTreeMap;

pub use error::ConfigError;
pub use parse::{
    RawContextSettings, RawMarkup, RawSettings, parse_settings_file, parse_settings_str,
};
use serde::Serialize;
pub use validate::SettingsWarning;
use validate::{settings_warnings, validate_settings};

/// Complete settings for one caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Snippet window sizing.
    pub context: ContextSettings,
    /// Markup inserted around matches and snippets.
    pub markup: Markup,
    /// Collations a backing store should compare patterns under.
    pub collations: Vec<String>,
    /// Characters to replace in storage patterns, with their replacement sequences.
    pub sanitize: BTreeMap<char, String>,
}

impl Settings {
    /// Checks the settings, failing on values that make snippets impossible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_settings(self)
    }

    /// Returns non-fatal warnings about the settings.
    pub fn warnings(&self) -> Vec<SettingsWarning> {
        settings_warnings(self)
    }

    /// Serializes the settings to TOML, in the format accepted by
    /// [`parse_settings_str`].
    pub fn to_toml(&self) -> String {
        let serializable = SerializableSettings {
            collations: &self.collations,
            context: &self.context,
            markup: &self.markup,
            sanitize: self
                .sanitize
                .iter()
                .map(|(c, replacement)| (c.to_string(), replacement.as_str()))
                .collect(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Context lengths around matches, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextSettings {
    /// Context shown around each match when there are many match groups.
    pub min: usize,
    /// Context shown around the match group when there is only one.
    pub max: usize,
    /// Snippet windows closer than this are merged into one.
    pub merge_interval: usize,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            min: 20,
            max: 120,
            merge_interval: 10,
        }
    }
}

/// Markup strings used when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Markup {
    /// Inserted before every match.
    pub match_before: String,
    /// Inserted after every match.
    pub match_after: String,
    /// Inserted before every snippet window.
    pub snippet_before: String,
    /// Inserted after every snippet window.
    pub snippet_after: String,
    /// Inserted between snippet windows, and at either end when text is cut.
    pub snippet_between: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            match_before: String::from("<mark>"),
            match_after: String::from("</mark>"),
            snippet_before: String::new(),
            snippet_after: String::new(),
            snippet_between: String::from(" … "),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Storage collations. Serialized first since TOML needs plain values before tables.
    collations: &'a [String],
    /// Context lengths.
    context: &'a ContextSettings,
    /// Markup strings.
    markup: &'a Markup,
    /// Sanitize map with string keys.
    sanitize: BTreeMap<String, &'a str>,
}
