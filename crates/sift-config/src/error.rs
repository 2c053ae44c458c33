//! Error types for sift settings.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a settings file.
    #[error("failed to read settings file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML settings.
    #[error("failed to parse settings {origin}: {source}")]
    ParseToml {
        /// Where the settings came from (a path, or `<string>`).
        origin: String,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A required key is absent.
    #[error("missing required settings key: {key}")]
    MissingKey {
        /// Dotted path of the missing key, e.g. `context.min`.
        key: &'static str,
    },

    /// Context lengths are zero or inverted.
    #[error(
        "invalid context lengths: min = {min}, max = {max} (both must be positive and min <= max)"
    )]
    InvalidContext {
        /// Configured minimum context length.
        min: usize,
        /// Configured maximum context length.
        max: usize,
    },

    /// A sanitize key is not exactly one character.
    #[error("sanitize key must be a single character: {key:?}")]
    InvalidSanitizeKey {
        /// The offending key.
        key: String,
    },
}
