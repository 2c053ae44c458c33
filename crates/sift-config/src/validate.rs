//! Settings validation.
//!
//! Fatal problems are returned as [`ConfigError`]s. Settings that work but are
//! probably not what the caller wants are reported as [`SettingsWarning`]s.

use std::fmt;

use crate::{ConfigError, Settings};

/// A non-fatal warning about the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsWarning {
    /// Matches are rendered without any markup around them.
    InvisibleMatches,
    /// Snippet windows are separated by nothing.
    EmptySeparator,
    /// Windows merge across gaps longer than the largest context.
    MergeIntervalExceedsMax {
        /// Configured merge interval.
        merge_interval: usize,
        /// Configured maximum context.
        max: usize,
    },
    /// A sanitize entry maps a character to itself.
    NoOpSanitize {
        /// The character.
        key: char,
    },
}

impl fmt::Display for SettingsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvisibleMatches => {
                write!(f, "match markup is empty, matches will not be visible")
            }
            Self::EmptySeparator => {
                write!(f, "snippet separator is empty, snippets will run together")
            }
            Self::MergeIntervalExceedsMax {
                merge_interval,
                max,
            } => {
                write!(
                    f,
                    "merge interval {merge_interval} exceeds maximum context {max}"
                )
            }
            Self::NoOpSanitize { key } => {
                write!(f, "sanitize entry for {key:?} replaces it with itself")
            }
        }
    }
}

/// Checks that the context lengths can produce snippets.
///
/// Both lengths must be positive and `min <= max`.
pub fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    let context = &settings.context;
    if context.min == 0 || context.max == 0 || context.min > context.max {
        return Err(ConfigError::InvalidContext {
            min: context.min,
            max: context.max,
        });
    }
    Ok(())
}

/// Returns warnings for settings that are valid but suspicious.
pub fn settings_warnings(settings: &Settings) -> Vec<SettingsWarning> {
    let mut warnings = Vec::new();
    let markup = &settings.markup;

    if markup.match_before.is_empty() && markup.match_after.is_empty() {
        warnings.push(SettingsWarning::InvisibleMatches);
    }

    if markup.snippet_between.is_empty() {
        warnings.push(SettingsWarning::EmptySeparator);
    }

    if settings.context.merge_interval > settings.context.max {
        warnings.push(SettingsWarning::MergeIntervalExceedsMax {
            merge_interval: settings.context.merge_interval,
            max: settings.context.max,
        });
    }

    for (key, replacement) in &settings.sanitize {
        let mut chars = replacement.chars();
        if chars.next() == Some(*key) && chars.next().is_none() {
            warnings.push(SettingsWarning::NoOpSanitize { key: *key });
        }
    }

    warnings
}
