//! Client configuration.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for connecting to the Nearby API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, e.g. "https://nearby.example.com/api". Every path is appended to it.
    pub base_url: String,

    /// Whole-request timeout. `None` leaves the HTTP library defaults in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub offline: OfflineSettings,
}

/// Behaviour of the offline fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineSettings {
    /// Apply failed provider updates and deletions to the local replica.
    ///
    /// Off by default: the replica is then append-only and a failed update
    /// or delete leaves it untouched.
    #[serde(default)]
    pub mirror_writes: bool,
}

impl ClientConfig {
    /// Create a config with just the API root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
            user_agent: default_user_agent(),
            offline: OfflineSettings::default(),
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_mirror_writes(mut self, enabled: bool) -> Self {
        self.offline.mirror_writes = enabled;
        self
    }

    /// Validated API root without trailing slashes.
    pub fn normalized_base_url(&self) -> Result<String> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let trimmed = self.base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => Ok(trimmed.to_string()),
            _ => Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            )),
        }
    }
}

fn default_user_agent() -> String {
    format!("Nearby/{}", env!("CARGO_PKG_VERSION"))
}
