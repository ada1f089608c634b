//! Engine configuration, loaded from TOML with per-section defaults.

pub mod api_config;
pub mod cache_config;
pub mod command_config;
pub mod defaults;
pub mod observability_config;
pub mod render_config;
pub mod topology_config;
pub mod traversal_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use api_config::ApiConfig;
pub use cache_config::CacheConfig;
pub use command_config::CommandConfig;
pub use observability_config::ObservabilityConfig;
pub use render_config::RenderConfig;
pub use topology_config::TopologyConfig;
pub use traversal_config::TraversalConfig;

use crate::constants::{MAX_DOWNSTREAM_NODES, MAX_UPSTREAM_DEPTH};
use crate::errors::{InsightError, InsightResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub traversal: TraversalConfig,
    pub topology: TopologyConfig,
    pub cache: CacheConfig,
    pub render: RenderConfig,
    pub api: ApiConfig,
    pub commands: CommandConfig,
    pub observability: ObservabilityConfig,
}

impl InsightConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> InsightResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| InsightError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> InsightResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            InsightError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&source)
    }

    /// Reject values that would make traversal or caching meaningless.
    pub fn validate(&self) -> InsightResult<()> {
        if self.traversal.max_depth == 0 || self.traversal.max_depth > MAX_UPSTREAM_DEPTH {
            return Err(InsightError::ConfigError(format!(
                "traversal.max_depth must be in 1..={MAX_UPSTREAM_DEPTH}, got {}",
                self.traversal.max_depth
            )));
        }
        if self.traversal.max_nodes == 0 || self.traversal.max_nodes > MAX_DOWNSTREAM_NODES {
            return Err(InsightError::ConfigError(format!(
                "traversal.max_nodes must be in 1..={MAX_DOWNSTREAM_NODES}, got {}",
                self.traversal.max_nodes
            )));
        }
        let ratio = self.topology.ratio_threshold;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(InsightError::ConfigError(format!(
                "topology.ratio_threshold must be in (0, 1], got {ratio}"
            )));
        }
        if self.cache.max_entries == 0 {
            return Err(InsightError::ConfigError(
                "cache.max_entries must be at least 1".to_string(),
            ));
        }
        if self.render.timeout_secs == 0 {
            return Err(InsightError::ConfigError(
                "render.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
