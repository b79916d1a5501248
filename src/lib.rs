//! tagtally - Frontmatter tag aggregation for content collections
//!
//! A command-line utility that counts tags declared in the YAML frontmatter
//! of markdown content files, grouped by content type, excluding drafts.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagTallyError;
