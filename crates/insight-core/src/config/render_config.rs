use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Rendering collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Upper bound on a single render, in seconds.
    pub timeout_secs: u64,
}

impl RenderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::DEFAULT_RENDER_TIMEOUT_SECS,
        }
    }
}
