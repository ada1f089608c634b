//! Payloads exchanged with the rendering, kicking, and messaging collaborators.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::graph::RelationshipGraph;
use super::topology::{LayoutPlan, Topology};
use crate::constants::CHATROOM_SUFFIX;

/// Everything the renderer needs to draw one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub group_id: String,
    pub group_name: String,
    pub graph: RelationshipGraph,
    pub topology: Topology,
    pub layout: LayoutPlan,
}

impl RenderRequest {
    /// File-name-safe stem for the rendered artifact.
    pub fn artifact_stem(&self) -> String {
        format!("invite_tree_{}", self.group_id.replace(CHATROOM_SUFFIX, "_"))
    }
}

/// Opaque reference to a rendered image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderArtifact {
    pub path: PathBuf,
}

/// Result of a kick request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickReport {
    /// Ids the backend confirmed as removed.
    pub kicked: Vec<String>,
}

impl KickReport {
    pub fn contains(&self, member_id: &str) -> bool {
        self.kicked.iter().any(|k| k == member_id)
    }
}

/// A message for the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    Text { body: String },
    Image { artifact: RenderArtifact },
}

impl OutboundMessage {
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text { body: body.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { body } => Some(body),
            Self::Image { .. } => None,
        }
    }
}
