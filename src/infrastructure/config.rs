//! Configuration management

use crate::error::{Result, TagTallyError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the config file marking a content root
pub const CONFIG_FILE: &str = "tagtally.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory under the root holding one subdirectory per content type
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// File extensions considered documents
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Content type used when a command omits the type argument
    #[serde(default)]
    pub default_type: Option<String>,
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "mdx".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dir: default_content_dir(),
            extensions: default_extensions(),
            default_type: None,
        }
    }
}

impl Config {
    /// Load config from tagtally.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagTallyError::NotContentRoot(path.to_path_buf())
            } else {
                TagTallyError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            TagTallyError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
        })
    }

    /// Load config, falling back to defaults when the file is absent.
    /// Used when the root was given explicitly rather than discovered.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Config::load_from_dir(path) {
            Ok(config) => Ok(config),
            Err(TagTallyError::NotContentRoot(_)) => Ok(Config::default()),
            Err(e) => Err(e),
        }
    }

    /// Save config to tagtally.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_path = path.join(CONFIG_FILE);

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
