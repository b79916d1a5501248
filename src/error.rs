//! Error types for tagtally

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagtally application
#[derive(Debug, Error)]
pub enum TagTallyError {
    #[error("Not a tagtally content root: {0}")]
    NotContentRoot(PathBuf),

    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagTallyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagTallyError::NotContentRoot(_) => 2,
            TagTallyError::UnknownContentType(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagTallyError::NotContentRoot(path) => {
                format!(
                    "Not a tagtally content root: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagtally init' in this directory to create a content root\n\
                    • Navigate to a directory containing tagtally.toml\n\
                    • Set TAGTALLY_ROOT environment variable to your content root\n\
                    • Pass the root explicitly with --root <path>",
                    path.display()
                )
            }
            TagTallyError::UnknownContentType(type_name) => {
                format!(
                    "Unknown content type: '{}'\n\n\
                    Suggestions:\n\
                    • Check the spelling of the content type\n\
                    • Use 'tagtally types' to see available content types\n\
                    • Content types are subdirectories of your content directory\n\
                    • Create the directory if the type is new",
                    type_name
                )
            }
            TagTallyError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: content_dir, default_type\n\
                        Example: tagtally config default_type blog",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagTallyError
pub type Result<T> = std::result::Result<T, TagTallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_content_root_suggestions() {
        let err = TagTallyError::NotContentRoot(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tagtally init"));
        assert!(msg.contains("TAGTALLY_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_unknown_content_type_suggestions() {
        let err = TagTallyError::UnknownContentType("blgo".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tagtally types"));
        assert!(msg.contains("subdirectories"));
    }

    #[test]
    fn test_config_key_suggestions() {
        let err = TagTallyError::Config("Unknown config key: editor".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("content_dir, default_type"));
        assert!(msg.contains("tagtally config default_type"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TagTallyError::Config("Bad config".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Bad config");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TagTallyError::NotContentRoot(PathBuf::from("/x")).exit_code(),
            2
        );
        assert_eq!(
            TagTallyError::UnknownContentType("x".to_string()).exit_code(),
            3
        );
        assert_eq!(TagTallyError::Config("x".to_string()).exit_code(), 1);
    }
}
