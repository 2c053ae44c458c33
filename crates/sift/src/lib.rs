//! sift: locale-aware search highlighting.
//!
//! sift takes a free-form query and a text and shows where the query matched.
//! Matching tolerates case, accents and ligatures according to a locale, so
//! `naive` finds `naïve` and `caesar` finds `Cæsar`, while the highlighted
//! output always shows the original text.
//!
//! A [`Highlighter`] holds validated [`Settings`] and a [`Locale`]:
//!
//! ```
//! use sift::{Highlighter, Locale, Settings, TextKind};
//!
//! let highlighter = Highlighter::new(Settings::default(), Locale::DEFAULT).unwrap();
//! let out = highlighter.highlight("naive", "A naïve question", TextKind::Plain);
//! assert_eq!(out.as_deref(), Some("A <mark>naïve</mark> question"));
//! ```
//!
//! Long or HTML-like text is rendered as windows of context around the matches
//! instead of whole ([`TextKind::Markup`]). For stores that search raw text,
//! [`Highlighter::storage_plan`] lists every spelling of every pattern.

#![warn(missing_docs)]

mod storage;
mod tree;

use std::path::Path;

pub use sift_config::{
    ConfigError, ContextSettings, Markup, Settings, SettingsWarning, parse_settings_file,
    parse_settings_str,
};
pub use sift_locale::{Locale, fold, slugify};
pub use sift_query::{Pattern, PatternKind, parse};
pub use sift_snippet::TextKind;
pub use storage::{NoEscape, PatternEscaper, SanitizeEscaper, StoragePlan, StorageTerm};
use tracing::{debug, warn};
pub use tree::{MAX_TREE_DEPTH, ResultNode};

/// Highlights query matches in text for one locale and set of settings.
#[derive(Debug, Clone)]
pub struct Highlighter {
    /// Validated settings.
    settings: Settings,
    /// Locale used for folding and ligatures.
    locale: Locale,
}

impl Highlighter {
    /// Creates a highlighter, rejecting settings that cannot produce snippets.
    ///
    /// Suspicious but valid settings are logged as warnings.
    pub fn new(settings: Settings, locale: Locale) -> Result<Self, ConfigError> {
        settings.validate()?;
        for warning in settings.warnings() {
            warn!(%warning, "questionable sift settings");
        }
        Ok(Self { settings, locale })
    }

    /// Creates a highlighter from a TOML settings file.
    pub fn from_file(path: &Path, locale: Locale) -> Result<Self, ConfigError> {
        Self::new(parse_settings_file(path)?, locale)
    }

    /// The settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The locale in use.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Parses `query` into patterns.
    pub fn patterns(&self, query: &str) -> Vec<Pattern> {
        parse(query)
    }

    /// Highlights the patterns of `query` in `text`.
    ///
    /// Returns `None` if the query has no patterns or nothing matched; the
    /// caller should then show `text` as it is.
    pub fn highlight(&self, query: &str, text: &str, kind: TextKind) -> Option<String> {
        self.highlight_patterns(&self.patterns(query), text, kind)
    }

    /// Highlights already parsed patterns in `text`.
    pub fn highlight_patterns(
        &self,
        patterns: &[Pattern],
        text: &str,
        kind: TextKind,
    ) -> Option<String> {
        if patterns.is_empty() {
            return None;
        }
        sift_snippet::highlight(text, patterns, kind, &self.settings, self.locale)
    }

    /// An escaper applying the configured sanitize map.
    pub fn escaper(&self) -> SanitizeEscaper<'_> {
        SanitizeEscaper::new(&self.settings.sanitize)
    }

    /// Lists the spellings a store should look for to find `query`, escaped
    /// with `escaper`.
    ///
    /// An empty query gives an empty plan: nothing should be filtered.
    pub fn storage_plan(&self, query: &str, escaper: &dyn PatternEscaper) -> StoragePlan {
        let plan = storage::plan(
            self.patterns(query),
            &self.settings.collations,
            self.locale,
            escaper,
        );
        debug!(
            terms = plan.terms.len(),
            variants = plan.terms.iter().map(|t| t.variants.len()).sum::<usize>(),
            "built storage plan"
        );
        plan
    }

    /// Sets the snippet of every field in `node` for `query`, returning how many
    /// fields matched.
    ///
    /// An empty query leaves the tree unchanged.
    pub fn inject(&self, query: &str, node: &mut ResultNode) -> usize {
        let patterns = self.patterns(query);
        if patterns.is_empty() {
            return 0;
        }
        node.fill_snippets(&mut |text: &str, kind| self.highlight_patterns(&patterns, text, kind))
    }
}
