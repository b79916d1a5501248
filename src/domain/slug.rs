//! Tag slug normalization
//!
//! Tags are authored free-form ("Rust", "CLI Tools", "webDev") and collapse
//! to a canonical kebab-case key before counting. Normalization is
//! deterministic and idempotent: normalizing an already-normalized slug
//! returns it unchanged.

use regex::Regex;
use std::sync::OnceLock;

/// Boundary between a lowercase/digit character and an uppercase character
fn camel_boundary_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap())
}

/// Boundary between an acronym and a following capitalized word (CLITools)
fn acronym_boundary_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap())
}

/// Any run of characters that is not a letter or digit
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]+").unwrap())
}

/// Normalize a tag to its kebab-case slug.
///
/// Word boundaries (spaces, punctuation, camelCase transitions) become
/// single hyphens; the result is lowercased with no leading or trailing
/// hyphen.
pub fn normalize(tag: &str) -> String {
    let split = camel_boundary_regex().replace_all(tag, "$1 $2");
    let split = acronym_boundary_regex().replace_all(&split, "$1 $2");
    let hyphenated = separator_regex().replace_all(&split, "-");
    hyphenated.trim_matches('-').to_lowercase()
}
