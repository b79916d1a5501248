//! Application layer - Use cases and orchestration

pub mod count_tags;
pub mod init;
pub mod list_documents;
pub mod manage_config;

pub use count_tags::CountTagsService;
pub use list_documents::{DocumentListing, ListDocumentsService};
pub use manage_config::ConfigService;
