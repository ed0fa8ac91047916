//! Command-line surface for `foglio`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use foglio::config::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "foglio", version, about = "Blog-post API client", long_about = None)]
pub struct Cli {
    /// API base URL, e.g. <https://jsonplaceholder.typicode.com>
    #[arg(long, env = "FOGLIO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Author id stamped onto created posts
    #[arg(long, env = "FOGLIO_USER_ID", default_value_t = 1)]
    pub user_id: u64,

    /// Highest id the backend stores durably; updates above it fall back to
    /// delete-then-recreate
    #[arg(long, env = "FOGLIO_SYNTHETIC_ID_THRESHOLD", default_value_t = 100)]
    pub synthetic_id_threshold: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, newest first, optionally filtered by exact id
    List {
        /// Show only the post whose id matches this text exactly
        #[arg(long)]
        id: Option<String>,
    },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        body_file: Option<PathBuf>,
    },
    /// Update a post (direct, or delete-then-recreate above the threshold)
    Update {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        body_file: Option<PathBuf>,
    },
    /// Delete a post
    Delete {
        #[arg(long)]
        id: u64,
    },
}
