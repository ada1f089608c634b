//! Deterministic node/edge model of a snapshot's invite graph.

use std::collections::BTreeMap;

use insight_core::models::{GraphEdge, GraphNode, MemberRecord, NodeRole, RelationshipGraph};

use crate::index::RelationshipIndex;

/// Merge membership and index data into a `RelationshipGraph`.
///
/// Nodes are every current member plus every inviter who left, sorted by id.
/// Edges are sorted by (inviter, invitee) and only join nodes that exist, so
/// assembling the same input twice yields identical output.
pub fn assemble(members: &[MemberRecord], index: &RelationshipIndex) -> RelationshipGraph {
    let mut nodes: BTreeMap<&str, GraphNode> = BTreeMap::new();

    for member in members {
        let id = member.id.as_str();
        if id.trim().is_empty() {
            continue;
        }
        let role = if index.parent(id).is_some() {
            NodeRole::Member
        } else {
            NodeRole::Root
        };
        let display_name = member
            .display_name
            .clone()
            .filter(|name| !name.trim().is_empty());
        nodes.insert(
            id,
            GraphNode {
                id: id.to_string(),
                display_name,
                role,
            },
        );
    }

    for inviter in index.parent_of().values() {
        nodes.entry(inviter.as_str()).or_insert_with(|| GraphNode {
            id: inviter.clone(),
            display_name: None,
            role: NodeRole::Departed,
        });
    }

    let mut edges: Vec<GraphEdge> = index
        .parent_of()
        .iter()
        .filter(|(invitee, inviter)| {
            nodes.contains_key(inviter.as_str()) && nodes.contains_key(invitee.as_str())
        })
        .map(|(invitee, inviter)| GraphEdge {
            inviter: inviter.clone(),
            invitee: invitee.clone(),
        })
        .collect();
    edges.sort();

    RelationshipGraph {
        nodes: nodes.into_values().collect(),
        edges,
    }
}
