use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Trigger keywords and command behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    pub trigger_graph: String,
    pub trigger_network: String,
    pub trigger_kick_member: String,
    pub trigger_kick_downline: String,
    pub trigger_help: String,
    /// Word separating the source group from the target group.
    pub target_separator: String,
    /// Pause between announcing a downline kick and executing it.
    pub kick_confirm_delay_secs: u64,
}

impl CommandConfig {
    pub fn kick_confirm_delay(&self) -> Duration {
        Duration::from_secs(self.kick_confirm_delay_secs)
    }

    /// All trigger keywords.
    pub fn triggers(&self) -> [&str; 5] {
        [
            self.trigger_graph.as_str(),
            self.trigger_network.as_str(),
            self.trigger_kick_member.as_str(),
            self.trigger_kick_downline.as_str(),
            self.trigger_help.as_str(),
        ]
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            trigger_graph: defaults::DEFAULT_TRIGGER_GRAPH.to_string(),
            trigger_network: defaults::DEFAULT_TRIGGER_NETWORK.to_string(),
            trigger_kick_member: defaults::DEFAULT_TRIGGER_KICK_MEMBER.to_string(),
            trigger_kick_downline: defaults::DEFAULT_TRIGGER_KICK_DOWNLINE.to_string(),
            trigger_help: defaults::DEFAULT_TRIGGER_HELP.to_string(),
            target_separator: defaults::DEFAULT_TARGET_SEPARATOR.to_string(),
            kick_confirm_delay_secs: defaults::DEFAULT_KICK_CONFIRM_DELAY_SECS,
        }
    }
}
