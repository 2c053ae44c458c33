//! Locale-aware character folding.
//!
//! Folding replaces accented and special characters with plain letters so that
//! `"Crème Brûlée"` and `"creme brulee"` compare equal. A locale's
//! [`TransliterationMap`] is the generic table below with the locale's overrides
//! tried first and its deprecated entries removed.
//!
//! Characters missing from the map fall back to canonical decomposition when it
//! yields a single ASCII base letter (`é` → `e`). Any other character is kept.
//! A character never folds to more than two characters, and only ligature
//! characters fold to two.

use std::{collections::HashMap, sync::LazyLock};

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::locale::{Locale, LocaleRules, Rule};

/// Generic transliteration table, in lookup order.
const BASE_RULES: &[Rule] = &[
    Rule::new("äæǽ", "ae"),
    Rule::new("öœ", "oe"),
    Rule::new("ü", "ue"),
    Rule::new("Ä", "Ae"),
    Rule::new("Ü", "Ue"),
    Rule::new("Ö", "Oe"),
    Rule::new("ÀÁÂÃÅǺĀĂĄǍ", "A"),
    Rule::new("àáâãåǻāăąǎª", "a"),
    Rule::new("ÇĆĈĊČ", "C"),
    Rule::new("çćĉċč", "c"),
    Rule::new("ÐĎĐ", "D"),
    Rule::new("ðďđ", "d"),
    Rule::new("ÈÉÊËĒĔĖĘĚ", "E"),
    Rule::new("èéêëēĕėęě", "e"),
    Rule::new("ĜĞĠĢ", "G"),
    Rule::new("ĝğġģ", "g"),
    Rule::new("ĤĦ", "H"),
    Rule::new("ĥħ", "h"),
    Rule::new("ÌÍÎÏĨĪĬǏĮİ", "I"),
    Rule::new("ìíîïĩīĭǐįı", "i"),
    Rule::new("Ĵ", "J"),
    Rule::new("ĵ", "j"),
    Rule::new("Ķ", "K"),
    Rule::new("ķ", "k"),
    Rule::new("ĹĻĽĿŁ", "L"),
    Rule::new("ĺļľŀł", "l"),
    Rule::new("ÑŃŅŇ", "N"),
    Rule::new("ñńņňŉ", "n"),
    Rule::new("ÒÓÔÕŌŎǑŐƠØǾ", "O"),
    Rule::new("òóôõōŏǒőơøǿº", "o"),
    Rule::new("ŔŖŘ", "R"),
    Rule::new("ŕŗř", "r"),
    Rule::new("ŚŜŞȘŠ", "S"),
    Rule::new("śŝşșšſ", "s"),
    Rule::new("ŢȚŤŦ", "T"),
    Rule::new("ţțťŧ", "t"),
    Rule::new("ÙÚÛŨŪŬŮŰŲƯǓǕǗǙǛ", "U"),
    Rule::new("ùúûũūŭůűųưǔǖǘǚǜ", "u"),
    Rule::new("ÝŸŶ", "Y"),
    Rule::new("ýÿŷ", "y"),
    Rule::new("Ŵ", "W"),
    Rule::new("ŵ", "w"),
    Rule::new("ŹŻŽ", "Z"),
    Rule::new("źżž", "z"),
    Rule::new("ÆǼ", "AE"),
    Rule::new("ß", "ss"),
    Rule::new("Ĳ", "IJ"),
    Rule::new("ĳ", "ij"),
    Rule::new("Œ", "OE"),
    Rule::new("ƒ", "f"),
];

/// One map per locale, indexed like [`Locale::ALL`].
static MAPS: LazyLock<[TransliterationMap; 4]> =
    LazyLock::new(|| Locale::ALL.map(|locale| TransliterationMap::build(locale.rules())));

/// Ordered transliteration rules of one locale, with a per-character lookup.
#[derive(Debug)]
pub struct TransliterationMap {
    /// Locale this map was built for.
    locale: Locale,
    /// Effective rules in priority order.
    entries: Vec<Rule>,
    /// First matching replacement for every mapped character.
    lookup: HashMap<char, &'static str>,
}

impl TransliterationMap {
    /// Builds the effective map for a locale.
    ///
    /// Overrides come first, followed by the generic entries that are neither
    /// deprecated nor redefined by an override.
    pub fn build(rules: &LocaleRules) -> Self {
        let entries: Vec<Rule> = rules
            .overrides
            .iter()
            .chain(
                BASE_RULES
                    .iter()
                    .filter(|rule| !rules.is_deprecated(rule.pattern))
                    .filter(|rule| !rules.is_overridden(rule.pattern)),
            )
            .copied()
            .collect();

        let mut lookup = HashMap::new();
        for rule in &entries {
            for c in rule.pattern.chars() {
                lookup.entry(c).or_insert(rule.replacement);
            }
        }

        Self {
            locale: rules.locale,
            entries,
            lookup,
        }
    }

    /// Returns the shared map for `locale`, building all maps on first use.
    pub fn for_locale(locale: Locale) -> &'static Self {
        &MAPS[locale.index()]
    }

    /// Locale this map was built for.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Effective rules in the order they are tried.
    pub fn entries(&self) -> &[Rule] {
        &self.entries
    }

    /// Returns the replacement the map defines for `c`, if any.
    pub fn replacement(&self, c: char) -> Option<&'static str> {
        self.lookup.get(&c).copied()
    }

    /// Folds `text`, appending the result to `out`.
    pub fn fold_into(&self, text: &str, out: &mut String) {
        for c in text.chars() {
            if let Some(replacement) = self.replacement(c) {
                out.push_str(replacement);
            } else {
                out.push(decompose_to_ascii(c).unwrap_or(c));
            }
        }
    }

    /// Folds `text` into a new string.
    pub fn fold(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.fold_into(text, &mut out);
        out
    }
}

/// Returns the ASCII base letter of `c` when its canonical decomposition is that
/// letter followed only by combining marks.
fn decompose_to_ascii(c: char) -> Option<char> {
    if c.is_ascii() {
        return None;
    }
    let mut base = None;
    let mut bases = 0;
    decompose_canonical(c, |part| {
        if !is_combining_mark(part) {
            bases += 1;
            base = Some(part);
        }
    });
    match base {
        Some(letter) if bases == 1 && letter.is_ascii() => Some(letter),
        _ => None,
    }
}

/// Folds accented and special characters in `text` to plain letters.
pub fn fold(text: &str, locale: Locale) -> String {
    TransliterationMap::for_locale(locale).fold(text)
}

/// Folds `text` and upper-cases it one character at a time.
///
/// A character whose upper-case form is more than one character is kept as is,
/// so the result has exactly one character per folded character.
pub fn fold_upper(text: &str, locale: Locale) -> String {
    fold(text, locale).chars().map(upper_char).collect()
}

/// Upper-cases `c` when that maps it to exactly one character.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
