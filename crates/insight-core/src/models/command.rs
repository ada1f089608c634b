//! Typed command descriptors. Raw text never reaches the engine.

use serde::{Deserialize, Serialize};

/// Operation kind, without arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    GenerateGraph,
    QueryNetwork,
    KickMember,
    KickDownline,
    Help,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenerateGraph => "generate_graph",
            Self::QueryNetwork => "query_network",
            Self::KickMember => "kick_member",
            Self::KickDownline => "kick_downline",
            Self::Help => "help",
        }
    }
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Render the invite graph of `source_group` and send it to `target_group`.
    GenerateGraph {
        source_group: String,
        target_group: String,
    },
    /// Report the upstream chain and downstream set of `member`.
    QueryNetwork { group: String, member: String },
    /// Remove `member` from `group`.
    KickMember { group: String, member: String },
    /// Remove `member` and everyone they transitively invited.
    KickDownline { group: String, member: String },
    /// Show usage.
    Help { group: String },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::GenerateGraph { .. } => CommandKind::GenerateGraph,
            Self::QueryNetwork { .. } => CommandKind::QueryNetwork,
            Self::KickMember { .. } => CommandKind::KickMember,
            Self::KickDownline { .. } => CommandKind::KickDownline,
            Self::Help { .. } => CommandKind::Help,
        }
    }

    /// The group whose membership the command reads.
    pub fn source_group(&self) -> &str {
        match self {
            Self::GenerateGraph { source_group, .. } => source_group,
            Self::QueryNetwork { group, .. }
            | Self::KickMember { group, .. }
            | Self::KickDownline { group, .. }
            | Self::Help { group } => group,
        }
    }

    /// The member the command targets, if any.
    pub fn member(&self) -> Option<&str> {
        match self {
            Self::QueryNetwork { member, .. }
            | Self::KickMember { member, .. }
            | Self::KickDownline { member, .. } => Some(member),
            Self::GenerateGraph { .. } | Self::Help { .. } => None,
        }
    }
}
