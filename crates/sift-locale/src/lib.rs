//! Locale-aware character folding for sift.
//!
//! This crate holds the per-locale rule registry and everything derived from it:
//!
//! - **Folding**: `Crème` → `Creme`, `æ` → `ae`, `ä` → `a` or `ae` depending on locale
//! - **Ligature expansion**: `caesar` → `{caesar, cæsar, cǽsar}` for raw-text stores
//! - **Ligature location**: where a text contains ligatures, for coordinate mapping
//! - **Slugs**: `Crème Brûlée` → `creme-brulee`
//!
//! All data is immutable after initialization and safe to share between threads.
//!
//! # Example
//!
//! ```
//! use sift_locale::{Locale, fold};
//!
//! let locale = Locale::from_code(Some("de_DE"));
//! assert_eq!(fold("Käse", locale), "Kaese");
//! assert_eq!(fold("Käse", Locale::DEFAULT), "Kase");
//! ```

#![warn(missing_docs)]

mod ligature;
mod locale;
mod slug;
mod transliterate;

pub use ligature::{expand, find_ligatures};
pub use locale::{Locale, LocaleRules, Rule, rules_for};
pub use slug::slugify;
pub use transliterate::{TransliterationMap, fold, fold_upper};
