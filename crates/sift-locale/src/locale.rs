//! Locale registry.
//!
//! Every supported locale carries a fixed rule set: which characters are ligatures
//! (fold to two letters), which two-letter sequences may be spelled as a ligature,
//! and how the locale adjusts the generic transliteration table.
//!
//! The set of locales is closed. Unknown or missing codes resolve to
//! [`Locale::DEFAULT`], whose rules always exist because lookup is an exhaustive
//! `match`.

use std::fmt;

/// A transliteration rule: every character in `pattern` folds to `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Set of characters this rule applies to.
    pub pattern: &'static str,
    /// Plain-letter replacement (one or two characters).
    pub replacement: &'static str,
}

impl Rule {
    /// Creates a rule.
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    /// Returns true when `c` is one of the characters this rule folds.
    pub fn applies_to(&self, c: char) -> bool {
        self.pattern.contains(c)
    }
}

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    /// French (`fr`). The default locale.
    #[default]
    French,
    /// German (`de`). Umlauts fold to two letters.
    German,
    /// English (`en`).
    English,
    /// Dutch (`nl`). Adds the `ij` ligature.
    Dutch,
}

impl Locale {
    /// Locale used when no code is given or the code is not recognized.
    pub const DEFAULT: Self = Self::French;

    /// All supported locales.
    pub const ALL: [Self; 4] = [Self::French, Self::German, Self::English, Self::Dutch];

    /// Parses a locale code such as `de`, `de_DE` or `de-AT`.
    ///
    /// Only the language part is considered, case-insensitively.
    pub fn parse(code: &str) -> Option<Self> {
        let language = code.trim().split(['_', '-']).next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "fr" | "fra" | "fre" => Some(Self::French),
            "de" | "deu" | "ger" => Some(Self::German),
            "en" | "eng" => Some(Self::English),
            "nl" | "nld" | "dut" => Some(Self::Dutch),
            _ => None,
        }
    }

    /// Resolves an optional locale code, falling back to [`Locale::DEFAULT`].
    pub fn from_code(code: Option<&str>) -> Self {
        code.and_then(Self::parse).unwrap_or(Self::DEFAULT)
    }

    /// Returns the two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::German => "de",
            Self::English => "en",
            Self::Dutch => "nl",
        }
    }

    /// Returns the folding rules for this locale.
    pub fn rules(self) -> &'static LocaleRules {
        match self {
            Self::French => &FRENCH,
            Self::German => &GERMAN,
            Self::English => &ENGLISH,
            Self::Dutch => &DUTCH,
        }
    }

    /// Position of this locale in [`Locale::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::French => 0,
            Self::German => 1,
            Self::English => 2,
            Self::Dutch => 3,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returns the rules for an optional locale code, using the default locale for
/// missing or unknown codes.
pub fn rules_for(code: Option<&str>) -> &'static LocaleRules {
    Locale::from_code(code).rules()
}

/// Immutable folding rules of one locale.
#[derive(Debug)]
pub struct LocaleRules {
    /// The locale these rules belong to.
    pub locale: Locale,
    /// Characters that fold to two letters under this locale.
    pub ligature_chars: &'static [char],
    /// Two-letter sequences that may be written as one of the given characters.
    pub ligature_pairs: &'static [(&'static str, &'static [char])],
    /// Rules tried before the generic table, replacing entries with the same pattern.
    pub overrides: &'static [Rule],
    /// Generic table patterns this locale never applies.
    pub deprecated: &'static [&'static str],
}

impl LocaleRules {
    /// Returns true if `c` is a ligature character for this locale.
    pub fn is_ligature(&self, c: char) -> bool {
        self.ligature_chars.contains(&c)
    }

    /// Returns the ligatures the two-letter sequence `first second` may stand for.
    pub fn ligatures_for_pair(&self, first: char, second: char) -> Option<&'static [char]> {
        self.ligature_pairs.iter().find_map(|&(pair, ligatures)| {
            let mut chars = pair.chars();
            (chars.next() == Some(first) && chars.next() == Some(second)).then_some(ligatures)
        })
    }

    /// Returns true if the generic table entry `pattern` is disabled for this locale.
    pub fn is_deprecated(&self, pattern: &str) -> bool {
        self.deprecated.contains(&pattern)
    }

    /// Returns true if `pattern` is redefined by one of this locale's overrides.
    pub fn is_overridden(&self, pattern: &str) -> bool {
        self.overrides.iter().any(|rule| rule.pattern == pattern)
    }
}

/// Overrides shared by the locales that fold umlauts to their base letter.
const BASE_LETTER_UMLAUTS: &[Rule] = &[
    Rule::new("ä", "a"),
    Rule::new("ö", "o"),
    Rule::new("ü", "u"),
    Rule::new("Ä", "A"),
    Rule::new("Ö", "O"),
    Rule::new("Ü", "U"),
    Rule::new("æǽ", "ae"),
    Rule::new("œ", "oe"),
];

/// Generic entries replaced by [`BASE_LETTER_UMLAUTS`].
const GERMAN_UMLAUT_PATTERNS: &[&str] = &["äæǽ", "öœ", "ü", "Ä", "Ö", "Ü"];

/// Ligature characters of locales using [`BASE_LETTER_UMLAUTS`].
const LATIN_LIGATURES: &[char] = &['æ', 'ǽ', 'œ', 'Æ', 'Ǽ', 'Œ', 'ß', 'ĳ', 'Ĳ'];

/// Rules for French.
static FRENCH: LocaleRules = LocaleRules {
    locale: Locale::French,
    ligature_chars: LATIN_LIGATURES,
    ligature_pairs: &[
        ("ae", &['æ', 'ǽ']),
        ("oe", &['œ']),
        ("AE", &['Æ', 'Ǽ']),
        ("OE", &['Œ']),
    ],
    overrides: BASE_LETTER_UMLAUTS,
    deprecated: GERMAN_UMLAUT_PATTERNS,
};

/// Rules for German.
static GERMAN: LocaleRules = LocaleRules {
    locale: Locale::German,
    ligature_chars: &[
        'ä', 'æ', 'ǽ', 'ö', 'œ', 'ü', 'Ä', 'Ö', 'Ü', 'Æ', 'Ǽ', 'Œ', 'ß', 'ĳ', 'Ĳ',
    ],
    ligature_pairs: &[
        ("ae", &['ä', 'æ', 'ǽ']),
        ("oe", &['ö', 'œ']),
        ("ue", &['ü']),
        ("ss", &['ß']),
        ("Ae", &['Ä']),
        ("Oe", &['Ö']),
        ("Ue", &['Ü']),
        ("AE", &['Æ', 'Ǽ']),
        ("OE", &['Œ']),
    ],
    overrides: &[],
    deprecated: &[],
};

/// Rules for English.
static ENGLISH: LocaleRules = LocaleRules {
    locale: Locale::English,
    ligature_chars: LATIN_LIGATURES,
    ligature_pairs: &[("ae", &['æ']), ("oe", &['œ']), ("AE", &['Æ']), ("OE", &['Œ'])],
    overrides: BASE_LETTER_UMLAUTS,
    deprecated: GERMAN_UMLAUT_PATTERNS,
};

/// Rules for Dutch.
static DUTCH: LocaleRules = LocaleRules {
    locale: Locale::Dutch,
    ligature_chars: LATIN_LIGATURES,
    ligature_pairs: &[
        ("ij", &['ĳ']),
        ("IJ", &['Ĳ']),
        ("ae", &['æ', 'ǽ']),
        ("oe", &['œ']),
        ("AE", &['Æ', 'Ǽ']),
        ("OE", &['Œ']),
    ],
    overrides: BASE_LETTER_UMLAUTS,
    deprecated: GERMAN_UMLAUT_PATTERNS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language_codes() {
        assert_eq!(Locale::parse("de"), Some(Locale::German));
        assert_eq!(Locale::parse("de_DE"), Some(Locale::German));
        assert_eq!(Locale::parse("NL-be"), Some(Locale::Dutch));
        assert_eq!(Locale::parse("en"), Some(Locale::English));
        assert_eq!(Locale::parse("xx"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn unknown_code_falls_back_to_default() {
        assert_eq!(Locale::from_code(Some("klingon")), Locale::DEFAULT);
        assert_eq!(Locale::from_code(None), Locale::DEFAULT);
        assert_eq!(rules_for(Some("zz")).locale, Locale::French);
    }

    #[test]
    fn rules_belong_to_their_locale() {
        for locale in Locale::ALL {
            assert_eq!(locale.rules().locale, locale);
            assert_eq!(Locale::ALL[locale.index()], locale);
            assert_eq!(Locale::parse(locale.code()), Some(locale));
        }
    }

    #[test]
    fn pair_lookup() {
        let rules = Locale::French.rules();
        assert_eq!(rules.ligatures_for_pair('a', 'e'), Some(&['æ', 'ǽ'][..]));
        assert_eq!(rules.ligatures_for_pair('s', 's'), None);
        assert_eq!(
            Locale::German.rules().ligatures_for_pair('s', 's'),
            Some(&['ß'][..])
        );
    }

    #[test]
    fn every_pair_ligature_is_a_ligature_char() {
        for locale in Locale::ALL {
            let rules = locale.rules();
            for (pair, ligatures) in rules.ligature_pairs {
                assert_eq!(pair.chars().count(), 2, "{locale}: {pair}");
                for c in *ligatures {
                    assert!(rules.is_ligature(*c), "{locale}: {c} missing");
                }
            }
        }
    }
}
