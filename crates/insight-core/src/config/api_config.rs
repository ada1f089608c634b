use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Messaging backend API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Key appended to every request as the `key` query parameter.
    pub api_key: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Whether both the URL and the key are set.
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            request_timeout_secs: defaults::DEFAULT_API_REQUEST_TIMEOUT_SECS,
        }
    }
}
