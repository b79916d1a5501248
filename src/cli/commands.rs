//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagtally")]
#[command(about = "Count frontmatter tags in content collections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Content root (default: discover via TAGTALLY_ROOT or tagtally.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new content root
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Content directory name (default: content)
        #[arg(short, long)]
        content_dir: Option<String>,
    },

    /// Count frontmatter tags for a content type
    Tags {
        /// Content type (default: the configured default_type)
        content_type: Option<String>,
    },

    /// List documents of a content type
    List {
        /// Content type (default: the configured default_type)
        content_type: Option<String>,

        /// Include drafts in the listing
        #[arg(long)]
        drafts: bool,
    },

    /// List available content types
    Types,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
