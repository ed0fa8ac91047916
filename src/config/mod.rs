//! Client settings with env-backed defaults.

use thiserror::Error;
use url::Url;

use crate::application::update::UpdatePolicy;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_USER_ID: u64 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Everything the client needs to talk to one backend: where it lives,
/// which author id new posts carry, and where its synthetic-id boundary
/// sits (ids above it are fabricated by the demo service and cannot be
/// updated in place).
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub user_id: u64,
    pub synthetic_id_threshold: u64,
}

impl ClientSettings {
    pub fn new(
        base_url: &str,
        user_id: u64,
        synthetic_id_threshold: u64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            user_id,
            synthetic_id_threshold,
        })
    }

    pub fn update_policy(&self) -> UpdatePolicy {
        UpdatePolicy::new(self.synthetic_id_threshold)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL parses"),
            user_id: DEFAULT_USER_ID,
            synthetic_id_threshold: UpdatePolicy::DEFAULT_THRESHOLD,
        }
    }
}
