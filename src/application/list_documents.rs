//! List documents use case

use crate::domain::Document;
use crate::error::Result;
use crate::infrastructure::repository::ContentRepository;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// A document with its display metadata pulled from frontmatter
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentListing {
    pub filename: String,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub draft: bool,
}

/// Service for listing documents of a content type
pub struct ListDocumentsService {
    repository: FileSystemRepository,
}

impl ListDocumentsService {
    /// Create a new list documents service
    pub fn new(repository: FileSystemRepository) -> Self {
        ListDocumentsService { repository }
    }

    /// List documents of a content type, newest first.
    ///
    /// Drafts are skipped unless `include_drafts` is set. Documents without
    /// frontmatter are listed with no title or date.
    pub fn execute(
        &self,
        content_type: &str,
        include_drafts: bool,
    ) -> Result<Vec<DocumentListing>> {
        let config = self.repository.load_config()?;
        let documents = self.repository.list_documents(&config, content_type)?;

        let mut listings = Vec::new();

        for document in documents {
            let raw = self
                .repository
                .read_document(&config, content_type, &document.filename)?;
            let front_matter = Document::parse(&raw).front_matter.unwrap_or_default();

            if front_matter.draft && !include_drafts {
                continue;
            }

            listings.push(DocumentListing {
                filename: document.filename,
                title: front_matter.title,
                date: front_matter.date,
                draft: front_matter.draft,
            });
        }

        // Newest first, undated entries last, then by filename
        listings.sort_by(|a, b| match (a.date, b.date) {
            (Some(da), Some(db)) => db.cmp(&da),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.filename.cmp(&b.filename),
        });

        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup(temp: &TempDir) -> ListDocumentsService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        fs::create_dir_all(temp.path().join("content").join("blog")).unwrap();
        ListDocumentsService::new(repo)
    }

    fn write_post(temp: &TempDir, name: &str, contents: &str) {
        fs::write(
            temp.path().join("content").join("blog").join(name),
            contents,
        )
        .unwrap();
    }

    #[test]
    fn test_lists_sorted_newest_first() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);

        write_post(&temp, "old.md", "---\ntitle: Old\ndate: 2025-01-10\n---\n");
        write_post(&temp, "new.md", "---\ntitle: New\ndate: 2025-01-20\n---\n");
        write_post(&temp, "undated.md", "---\ntitle: Undated\n---\n");

        let listings = service.execute("blog", false).unwrap();
        let filenames: Vec<&str> = listings.iter().map(|l| l.filename.as_str()).collect();
        assert_eq!(filenames, vec!["new.md", "old.md", "undated.md"]);
    }

    #[test]
    fn test_drafts_hidden_by_default() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);

        write_post(&temp, "wip.md", "---\ntitle: WIP\ndraft: true\n---\n");
        write_post(&temp, "done.md", "---\ntitle: Done\n---\n");

        let listings = service.execute("blog", false).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].filename, "done.md");

        let with_drafts = service.execute("blog", true).unwrap();
        assert_eq!(with_drafts.len(), 2);
        assert!(with_drafts.iter().any(|l| l.draft));
    }

    #[test]
    fn test_no_front_matter_listed_bare() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);

        write_post(&temp, "plain.md", "# Heading only");

        let listings = service.execute("blog", false).unwrap();
        assert_eq!(listings.len(), 1);
        assert!(listings[0].title.is_none());
        assert!(listings[0].date.is_none());
        assert!(!listings[0].draft);
    }
}
