//! File system content repository

use crate::error::{Result, TagTallyError};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A document file listed for a content type, path relative to the type
/// directory with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub filename: String,
}

impl DocumentEntry {
    pub fn new(filename: String) -> Self {
        DocumentEntry { filename }
    }
}

/// Abstract repository for content root operations
pub trait ContentRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from tagtally.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to tagtally.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if tagtally.toml exists
    fn is_initialized(&self) -> bool;

    /// Write a default tagtally.toml marking this directory as a content root
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ContentRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given content root.
    ///
    /// The root is always explicit; nothing below this layer assumes the
    /// process working directory.
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the content root.
    /// First checks the TAGTALLY_ROOT environment variable, then walks up
    /// from the current directory looking for tagtally.toml.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGTALLY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_file(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagTallyError::Config(format!(
                    "TAGTALLY_ROOT is set to '{}' but no {} found. \
                    Run 'tagtally init' in that directory or unset TAGTALLY_ROOT.",
                    path.display(),
                    CONFIG_FILE
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the content root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_file(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TagTallyError::NotContentRoot(start.to_path_buf()));
                }
            }
        }
    }

    fn has_config_file(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }
}

impl ContentRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        // Roots passed explicitly (--root) need no config file
        Config::load_or_default(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_file(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(TagTallyError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        Config::default().save_to_dir(&self.root)
    }
}

// Document listing and reading (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Directory holding documents of the given content type
    fn type_dir(&self, config: &Config, content_type: &str) -> PathBuf {
        self.root.join(&config.content_dir).join(content_type)
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn document_entry_from_relative_path(config: &Config, rel: &Path) -> Option<DocumentEntry> {
        let extension = rel.extension()?.to_str()?;
        if !config
            .extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
        {
            return None;
        }

        Self::normalize_relative_path(rel).map(DocumentEntry::new)
    }

    /// List all document files for a content type.
    ///
    /// Walks the type directory recursively, skipping dot-directories and
    /// files whose extension is not configured. Ordering is not significant
    /// to callers. An unknown type is an error.
    pub fn list_documents(
        &self,
        config: &Config,
        content_type: &str,
    ) -> Result<Vec<DocumentEntry>> {
        let type_dir = self.type_dir(config, content_type);

        if !type_dir.is_dir() {
            return Err(TagTallyError::UnknownContentType(content_type.to_string()));
        }

        let mut documents = Vec::new();

        let walker = WalkDir::new(&type_dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let entry = entry.map_err(|e| TagTallyError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&type_dir) else {
                continue;
            };
            if let Some(doc) = Self::document_entry_from_relative_path(config, rel) {
                documents.push(doc);
            }
        }

        Ok(documents)
    }

    /// Read a document's raw contents. Any I/O error propagates unchanged.
    pub fn read_document(
        &self,
        config: &Config,
        content_type: &str,
        filename: &str,
    ) -> Result<String> {
        let path = self.type_dir(config, content_type).join(filename);
        fs::read_to_string(&path).map_err(TagTallyError::Io)
    }

    /// List available content types (subdirectories of the content dir)
    pub fn list_content_types(&self, config: &Config) -> Result<Vec<String>> {
        let content_dir = self.root.join(&config.content_dir);

        if !content_dir.is_dir() {
            return Err(TagTallyError::Config(format!(
                "Content directory '{}' not found under {}",
                config.content_dir,
                self.root.display()
            )));
        }

        let mut types = Vec::new();
        for entry in fs::read_dir(&content_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with('.') {
                    types.push(name.to_string());
                }
            }
        }

        types.sort();
        Ok(types)
    }
}
