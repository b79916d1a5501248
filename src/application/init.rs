//! Initialize content root use case

use crate::error::Result;
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new content root at the specified path.
///
/// Writes tagtally.toml and creates the content directory.
pub fn init(path: &Path, content_dir: Option<&str>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let mut config = Config::default();
    if let Some(dir) = content_dir {
        config.content_dir = dir.to_string();
        repo.save_config(&config)?;
    }
    fs::create_dir_all(path.join(&config.content_dir))?;

    println!("Initialized tagtally content root at {}", path.display());
    println!("Content directory: {}", config.content_dir);

    Ok(())
}
