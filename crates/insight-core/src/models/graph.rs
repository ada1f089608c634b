//! Renderer-agnostic invite graph: nodes tagged by role, inviter → invitee edges.

use serde::{Deserialize, Serialize};

/// Role of a node in the invite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Current member with a recorded inviter.
    Member,
    /// Current member without a recorded inviter.
    Root,
    /// Referenced as an inviter but no longer in the group.
    Departed,
}

/// A node of the assembled graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    /// Nickname for current members; `None` for departed inviters.
    pub display_name: Option<String>,
    pub role: NodeRole,
}

/// Directed edge: `inviter` invited `invitee`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub inviter: String,
    pub invitee: String,
}

/// The whole invite graph, nodes sorted by id and edges by (inviter, invitee).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl RelationshipGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes
            .binary_search_by(|n| n.id.as_str().cmp(id))
            .ok()
            .map(|idx| &self.nodes[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Ids of members nobody invited, in node order.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes_with_role(NodeRole::Root)
    }

    /// Ids of departed inviters, in node order.
    pub fn departed(&self) -> Vec<&str> {
        self.nodes_with_role(NodeRole::Departed)
    }

    fn nodes_with_role(&self, role: NodeRole) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.role == role)
            .map(|n| n.id.as_str())
            .collect()
    }
}
