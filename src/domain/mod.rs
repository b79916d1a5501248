//! Domain layer - Business logic and domain models

pub mod front_matter;
pub mod slug;
pub mod tally;

pub use front_matter::{Document, FrontMatter};
pub use tally::TagTally;
