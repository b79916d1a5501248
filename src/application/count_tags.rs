//! Tag counting use case
//!
//! The core aggregation: for one content type, count how often each
//! normalized tag appears in the frontmatter of non-draft documents.

use crate::domain::{slug, Document, TagTally};
use crate::error::Result;
use crate::infrastructure::repository::ContentRepository;
use crate::infrastructure::FileSystemRepository;
use std::collections::BTreeMap;

/// Service for counting frontmatter tags
pub struct CountTagsService {
    repository: FileSystemRepository,
}

impl CountTagsService {
    /// Create a new count tags service
    pub fn new(repository: FileSystemRepository) -> Self {
        CountTagsService { repository }
    }

    /// Count tags across all non-draft documents of a content type.
    ///
    /// Returns a mapping from normalized tag slug to occurrence count.
    /// Documents are processed one at a time; the result is independent of
    /// listing order and rebuilt from disk on every call.
    ///
    /// A document contributes nothing when its frontmatter is absent or
    /// malformed, when it is marked `draft: true`, or when it lists no
    /// tags. A repeated tag within one document's list counts once per
    /// occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The content type does not exist
    /// - Any document file cannot be read (the whole call aborts)
    pub fn execute(&self, content_type: &str) -> Result<BTreeMap<String, u64>> {
        let config = self.repository.load_config()?;
        let documents = self.repository.list_documents(&config, content_type)?;

        let mut tally = TagTally::new();

        for document in documents {
            let raw = self
                .repository
                .read_document(&config, content_type, &document.filename)?;

            let parsed = Document::parse(&raw);
            let Some(front_matter) = parsed.front_matter else {
                continue;
            };

            if front_matter.draft {
                continue;
            }

            for tag in &front_matter.tags {
                tally.bump(&slug::normalize(tag));
            }
        }

        Ok(tally.into_counts())
    }
}
