//! Transport port the view-state logic is written against.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::posts::{NewPost, Post};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("server error: status {status} body {body}")]
    Server { status: u16, body: String },
    #[error("failed to parse body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The four calls the remote post service exposes. Kept minimal so the
/// application layer tests against an in-memory fake.
#[async_trait]
pub trait PostApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;
    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError>;
    async fn update_post(&self, id: u64, post: &Post) -> Result<Post, ApiError>;
    async fn delete_post(&self, id: u64) -> Result<(), ApiError>;
}
