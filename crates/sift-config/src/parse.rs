//! Settings parsing.
//!
//! TOML is parsed into intermediate `Raw*` structures whose fields are all
//! optional, so that a missing key can be reported by name instead of through a
//! generic deserialization error. [`RawSettings::resolve`] then checks required
//! keys and validates the result.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{ConfigError, ContextSettings, Markup, Settings};

/// Origin reported for settings parsed from a string.
const STRING_ORIGIN: &str = "<string>";

/// Raw settings as parsed directly from TOML.
///
/// This mirrors the TOML schema exactly.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Context section.
    pub context: Option<RawContextSettings>,
    /// Markup section.
    pub markup: Option<RawMarkup>,
    /// Storage collations. Accepts either a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub collations: Option<Vec<String>>,
    /// Storage sanitize map: single-character key -> replacement.
    pub sanitize: Option<BTreeMap<String, String>>,
}

/// Raw context section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawContextSettings {
    /// Minimum context length.
    pub min: Option<usize>,
    /// Maximum context length.
    pub max: Option<usize>,
    /// Distance under which snippet windows merge.
    pub merge_interval: Option<usize>,
}

/// Raw markup section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMarkup {
    /// Inserted before every match.
    pub match_before: Option<String>,
    /// Inserted after every match.
    pub match_after: Option<String>,
    /// Inserted before every snippet window.
    pub snippet_before: Option<String>,
    /// Inserted after every snippet window.
    pub snippet_after: Option<String>,
    /// Inserted between snippet windows.
    pub snippet_between: Option<String>,
}

/// Returns the value of a required key or a [`ConfigError::MissingKey`].
fn required<T>(value: Option<T>, key: &'static str) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::MissingKey { key })
}

impl RawSettings {
    /// Checks required keys, converts the sanitize map, and validates the result.
    pub fn resolve(self) -> Result<Settings, ConfigError> {
        let context = required(self.context, "context")?;
        let markup = required(self.markup, "markup")?;

        let settings = Settings {
            context: ContextSettings {
                min: required(context.min, "context.min")?,
                max: required(context.max, "context.max")?,
                merge_interval: required(context.merge_interval, "context.merge_interval")?,
            },
            markup: Markup {
                match_before: required(markup.match_before, "markup.match_before")?,
                match_after: required(markup.match_after, "markup.match_after")?,
                snippet_before: required(markup.snippet_before, "markup.snippet_before")?,
                snippet_after: required(markup.snippet_after, "markup.snippet_after")?,
                snippet_between: required(markup.snippet_between, "markup.snippet_between")?,
            },
            collations: self.collations.unwrap_or_default(),
            sanitize: resolve_sanitize(self.sanitize.unwrap_or_default())?,
        };

        settings.validate()?;
        Ok(settings)
    }
}

/// Converts string keys of the sanitize map to characters.
fn resolve_sanitize(raw: BTreeMap<String, String>) -> Result<BTreeMap<char, String>, ConfigError> {
    raw.into_iter()
        .map(|(key, replacement)| {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok((c, replacement)),
                _ => Err(ConfigError::InvalidSanitizeKey { key }),
            }
        })
        .collect()
}

/// Parses and validates settings from a TOML file.
pub fn parse_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_raw(&contents, &path.display().to_string())?.resolve()
}

/// Parses and validates settings from a TOML string.
pub fn parse_settings_str(contents: &str) -> Result<Settings, ConfigError> {
    parse_raw(contents, STRING_ORIGIN)?.resolve()
}

/// Deserializes TOML into [`RawSettings`].
fn parse_raw(contents: &str, origin: &str) -> Result<RawSettings, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        origin: origin.to_string(),
        source,
    })
}
