use serde::{Deserialize, Serialize};

use super::defaults;

/// Bounds applied to upstream and downstream walks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Maximum number of ancestors walked before the chain is truncated.
    pub max_depth: usize,
    /// Maximum number of descendants collected before the set is truncated.
    pub max_nodes: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_MAX_UPSTREAM_DEPTH,
            max_nodes: defaults::DEFAULT_MAX_DOWNSTREAM_NODES,
        }
    }
}
