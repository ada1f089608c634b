use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for star-shape detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    /// Minimum direct-children count of the busiest inviter.
    pub absolute_threshold: usize,
    /// Minimum share of the group invited directly by the busiest inviter.
    pub ratio_threshold: f64,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            absolute_threshold: defaults::DEFAULT_STAR_ABSOLUTE_THRESHOLD,
            ratio_threshold: defaults::DEFAULT_STAR_RATIO_THRESHOLD,
        }
    }
}
