//! YAML frontmatter parsing
//!
//! Documents may start with a metadata block delimited by `---` lines:
//!
//! ```markdown
//! ---
//! title: My Post
//! tags:
//!   - rust
//!   - cli
//! draft: false
//! ---
//!
//! Body text starts here.
//! ```
//!
//! A document without a block, or with a block that does not deserialize,
//! simply has no frontmatter. Parsing never fails.

use chrono::NaiveDate;
use serde::Deserialize;

/// Typed frontmatter fields read by tagtally. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct FrontMatter {
    /// Document title
    #[serde(default)]
    pub title: Option<String>,

    /// Publication date
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Tags as authored (not yet normalized)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Drafts are excluded from aggregation
    #[serde(default)]
    pub draft: bool,
}

/// A parsed document: optional frontmatter plus the remaining body text
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub front_matter: Option<FrontMatter>,
    pub body: String,
}

impl Document {
    /// Parse raw document text into frontmatter and body.
    ///
    /// Missing delimiters or YAML that fails to deserialize yield
    /// `front_matter: None` with the full text as the body.
    pub fn parse(raw: &str) -> Document {
        let Some((yaml, body)) = split_front_matter(raw) else {
            return Document {
                front_matter: None,
                body: raw.to_string(),
            };
        };

        let front_matter = if yaml.trim().is_empty() {
            Some(FrontMatter::default())
        } else {
            serde_yaml::from_str::<FrontMatter>(&yaml).ok()
        };

        match front_matter {
            Some(fm) => Document {
                front_matter: Some(fm),
                body,
            },
            // Delimiters present but the block is malformed: treat the
            // document as having no metadata at all.
            None => Document {
                front_matter: None,
                body: raw.to_string(),
            },
        }
    }
}

/// Split a leading `---` block from the text.
///
/// The opening delimiter must be the first line; the closing delimiter is
/// the next line consisting of `---`. Returns `(yaml, body)` or `None` if
/// either delimiter is missing.
fn split_front_matter(raw: &str) -> Option<(String, String)> {
    let mut lines = raw.lines();

    if lines.next()?.trim_end() != "---" {
        return None;
    }

    let mut yaml_lines = Vec::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == "---" {
            closed = true;
            break;
        }
        yaml_lines.push(line);
    }

    if !closed {
        return None;
    }

    let body: Vec<&str> = lines.collect();
    Some((yaml_lines.join("\n"), body.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_front_matter() {
        let raw = "---\n\
                   title: Hello\n\
                   date: 2025-01-17\n\
                   tags:\n\
                   \x20 - Rust\n\
                   \x20 - CLI Tools\n\
                   draft: false\n\
                   ---\n\
                   \n\
                   Body text.";

        let doc = Document::parse(raw);
        let fm = doc.front_matter.unwrap();

        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.date, NaiveDate::from_ymd_opt(2025, 1, 17));
        assert_eq!(fm.tags, vec!["Rust", "CLI Tools"]);
        assert!(!fm.draft);
        assert!(doc.body.contains("Body text."));
    }

    #[test]
    fn test_parse_no_front_matter() {
        let raw = "# Just Markdown\n\nNo metadata here.";
        let doc = Document::parse(raw);

        assert!(doc.front_matter.is_none());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn test_parse_unclosed_block() {
        let raw = "---\ntitle: Oops\n# No closing delimiter";
        let doc = Document::parse(raw);

        assert!(doc.front_matter.is_none());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let raw = "---\ntags: [unclosed\n---\nBody";
        let doc = Document::parse(raw);

        assert!(doc.front_matter.is_none());
    }

    #[test]
    fn test_parse_wrong_field_type_is_malformed() {
        // `tags` as a scalar instead of a list does not deserialize
        let raw = "---\ntags: rust\n---\nBody";
        let doc = Document::parse(raw);

        assert!(doc.front_matter.is_none());
    }

    #[test]
    fn test_parse_empty_block() {
        let raw = "---\n---\nBody";
        let doc = Document::parse(raw);

        let fm = doc.front_matter.unwrap();
        assert!(fm.tags.is_empty());
        assert!(!fm.draft);
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_missing_fields_default() {
        let raw = "---\ntitle: Minimal\n---\n";
        let doc = Document::parse(raw);

        let fm = doc.front_matter.unwrap();
        assert_eq!(fm.title.as_deref(), Some("Minimal"));
        assert!(fm.tags.is_empty());
        assert!(!fm.draft);
        assert!(fm.date.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let raw = "---\ntitle: X\nlayout: post\nslug: custom\n---\n";
        let doc = Document::parse(raw);

        assert!(doc.front_matter.is_some());
    }

    #[test]
    fn test_draft_true() {
        let raw = "---\ndraft: true\ntags:\n  - hidden\n---\n";
        let doc = Document::parse(raw);

        let fm = doc.front_matter.unwrap();
        assert!(fm.draft);
        assert_eq!(fm.tags, vec!["hidden"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "---\r\ntitle: Windows\r\n---\r\nBody";
        let doc = Document::parse(raw);

        let fm = doc.front_matter.unwrap();
        assert_eq!(fm.title.as_deref(), Some("Windows"));
    }

    #[test]
    fn test_delimiter_not_first_line() {
        let raw = "intro\n---\ntitle: X\n---\n";
        let doc = Document::parse(raw);

        assert!(doc.front_matter.is_none());
    }
}
