//! Reducing markup-bearing text to the plain text that is searched.

use std::sync::LazyLock;

use regex::Regex;

/// Matches an HTML-like tag, including comments.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("tag pattern is valid"));

/// Matches a run of whitespace.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Entities decoded after tags are removed. `&amp;` comes last so that
/// `&amp;lt;` decodes to `&lt;` and not `<`.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Removes tags, decodes basic entities, and collapses whitespace runs to a
/// single space. The result is trimmed.
pub fn strip_markup(text: &str) -> String {
    let mut plain = TAG.replace_all(text, "").into_owned();
    for (entity, replacement) in ENTITIES {
        if plain.contains(entity) {
            plain = plain.replace(entity, replacement);
        }
    }
    WHITESPACE.replace_all(plain.trim(), " ").into_owned()
}
