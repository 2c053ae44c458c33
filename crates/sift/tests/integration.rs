//! Integration tests for sift.
//!
//! Tests the full pipeline: settings file -> highlighter -> query -> snippet.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{collections::BTreeMap, fs, path::PathBuf};

use sift::{ConfigError, Highlighter, Locale, NoEscape, ResultNode, Settings, TextKind};

/// Settings used by most tests: bracket markup and small windows.
const SETTINGS: &str = r#"
collations = "utf8mb4_unicode_ci"

[context]
min = 4
max = 12
merge_interval = 3

[markup]
match_before = "["
match_after = "]"
snippet_before = "{"
snippet_after = "}"
snippet_between = "…"

[sanitize]
"%" = "\\%"
"#;

/// Test helper holding a temporary settings directory.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Writes a settings file and returns its path.
    fn write_settings(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("sift.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// Loads a highlighter from `content`.
    fn highlighter(&self, content: &str, locale: Locale) -> Highlighter {
        Highlighter::from_file(&self.write_settings(content), locale).unwrap()
    }
}

#[test]
fn test_end_to_end_default_locale() {
    let h = Highlighter::new(Settings::default(), Locale::from_code(None)).unwrap();
    let out = h.highlight(
        "naive",
        "The cafe serves coffee and naive customers",
        TextKind::Plain,
    );
    assert_eq!(
        out.as_deref(),
        Some("The cafe serves coffee and <mark>naive</mark> customers")
    );
}

#[test]
fn test_unknown_locale_falls_back_to_default() {
    let env = TestEnv::new();
    let h = env.highlighter(SETTINGS, Locale::from_code(Some("xx_YY")));
    assert_eq!(h.locale(), Locale::DEFAULT);
    assert_eq!(
        h.highlight("kase", "Käse", TextKind::Plain).as_deref(),
        Some("[Käse]")
    );
}

#[test]
fn test_german_umlauts_and_sharp_s() {
    let env = TestEnv::new();
    let h = env.highlighter(SETTINGS, Locale::from_code(Some("de-AT")));
    assert_eq!(h.highlight("muenchen", "Münchner Straße", TextKind::Plain), None);
    assert_eq!(
        h.highlight("muench strasse", "Münchner Straße", TextKind::Plain)
            .as_deref(),
        Some("[Münch]ner [Straße]")
    );
}

#[test]
fn test_markup_snippets_from_file_settings() {
    let env = TestEnv::new();
    let h = env.highlighter(SETTINGS, Locale::DEFAULT);
    let text = "<article><h1>Notes</h1><p>First we talk about the weather. \
                Then, much later, the needle shows up.</p></article>";
    let out = h.highlight("needle", text, TextKind::Markup);
    assert_eq!(out.as_deref(), Some("…{ later, the [needle] shows up.}"));
}

#[test]
fn test_markup_entities_match_decoded_and_render_escaped() {
    let env = TestEnv::new();
    let h = env.highlighter(SETTINGS, Locale::DEFAULT);
    let out = h.highlight("r&d", "<p>R&amp;D</p>", TextKind::Markup);
    assert_eq!(out.as_deref(), Some("{[R&amp;D]}"));
}

#[test]
fn test_escaped_tags_in_markup_stay_escaped() {
    let env = TestEnv::new();
    let h = env.highlighter(SETTINGS, Locale::DEFAULT);
    let text = "<p>&lt;script&gt;alert(1)&lt;/script&gt; payload</p>";
    let out = h.highlight("payload", text, TextKind::Markup).unwrap();
    assert!(!out.contains("<script>"), "{out}");
    assert!(out.contains("[payload]"), "{out}");
}

#[test]
fn test_storage_plan_from_file_settings() {
    let env = TestEnv::new();
    let h = env.highlighter(SETTINGS, Locale::from_code(Some("nl")));

    let plan = h.storage_plan(r#"ijs "100% vrij""#, &h.escaper());
    assert_eq!(plan.collations, ["utf8mb4_unicode_ci"]);
    assert_eq!(plan.terms.len(), 2);
    assert_eq!(plan.terms[0].variants, ["ijs", "ĳs"]);
    assert_eq!(plan.terms[1].variants, ["100\\% vrij", "100\\% vrĳ"]);

    let raw = h.storage_plan("100%", &NoEscape);
    assert_eq!(raw.terms[0].variants, ["100%"]);
}

#[test]
fn test_inject_into_result_tree() {
    let env = TestEnv::new();
    let h = env.highlighter(SETTINGS, Locale::DEFAULT);
    let mut result = ResultNode::List(vec![ResultNode::Record(BTreeMap::from([
        ("name".into(), ResultNode::field("Œuvres complètes", TextKind::Plain)),
        (
            "summary".into(),
            ResultNode::field("<p>Une <em>oeuvre</em> majeure.</p>", TextKind::Markup),
        ),
        ("year".into(), ResultNode::field("1862", TextKind::Plain)),
    ]))]);

    assert_eq!(h.inject("oeuvre", &mut result), 2);
    let record = result.at(0).unwrap();
    assert_eq!(
        record.get("name").and_then(ResultNode::snippet),
        Some("[Œuvre]s complètes")
    );
    assert_eq!(
        record.get("summary").and_then(ResultNode::snippet),
        Some("{Une [oeuvre] majeure.}")
    );
    assert_eq!(record.get("year").and_then(ResultNode::snippet), None);
}

#[test]
fn test_invalid_settings_file() {
    let env = TestEnv::new();
    let path = env.write_settings(&SETTINGS.replace("min = 4", "min = 40"));
    let err = Highlighter::from_file(&path, Locale::DEFAULT).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidContext { min: 40, max: 12 }));

    let path = env.write_settings(&SETTINGS.replace("snippet_between = \"…\"\n", ""));
    let err = Highlighter::from_file(&path, Locale::DEFAULT).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingKey {
            key: "markup.snippet_between"
        }
    ));
}

#[test]
fn test_settings_round_trip_through_file() {
    let env = TestEnv::new();
    let h = env.highlighter(SETTINGS, Locale::DEFAULT);
    let reloaded = env.highlighter(&h.settings().to_toml(), Locale::DEFAULT);
    assert_eq!(reloaded.settings(), h.settings());
}
