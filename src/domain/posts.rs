//! Post records as the remote service shapes them.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A blog post as returned by the remote service. Ids are server-assigned;
/// nothing here assumes they are dense or monotonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Creation payload. Plain creates leave `id` unset and let the server
/// assign one; the delete-then-recreate update strategy sends the original
/// id explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Title and body are required by the compose and edit forms.
pub fn validate_content(title: &str, body: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("title must not be empty"));
    }
    if body.trim().is_empty() {
        return Err(DomainError::validation("body must not be empty"));
    }
    Ok(())
}
