//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{ContentRepository, DocumentEntry, FileSystemRepository};
