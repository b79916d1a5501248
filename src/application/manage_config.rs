//! Config management use case

use crate::error::{Result, TagTallyError};
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};

/// Service for managing content root configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "content_dir" => Ok(config.content_dir),
            "default_type" => Ok(config.default_type.unwrap_or_default()),
            "extensions" => Ok(config.extensions.join(",")),
            _ => Err(TagTallyError::Config(format!(
                "Unknown config key: '{}'",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "content_dir" => {
                config.content_dir = value.to_string();
            }
            "default_type" => {
                config.default_type = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "extensions" => {
                config.extensions = value
                    .split(',')
                    .map(|e| e.trim().trim_start_matches('.').to_string())
                    .filter(|e| !e.is_empty())
                    .collect();
            }
            _ => {
                return Err(TagTallyError::Config(format!(
                    "Unknown config key: '{}'",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
