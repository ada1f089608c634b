//! Upstream walk: "who invited this member, transitively?"

use std::collections::{HashMap, HashSet};

use insight_observability::events;
use serde::Serialize;

use crate::directory::MemberDirectory;

/// One inviter on the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ancestor {
    pub id: String,
    /// Display name while still a member; `None` once departed.
    pub display_name: Option<String>,
    /// The ancestor is no longer in the group.
    pub departed: bool,
}

/// An element of an upstream chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChainEntry {
    Ancestor(Ancestor),
    /// The walk reached an id it had already visited.
    CycleDetected { at: String },
    /// The walk hit its depth bound while the chain continued.
    Truncated,
}

/// Ancestors of a member, ordered furthest → nearest.
///
/// A sentinel, if any, occupies the furthest position: it marks where the
/// walk toward the root stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamChain {
    pub member_id: String,
    pub entries: Vec<ChainEntry>,
}

impl UpstreamChain {
    pub fn ancestors(&self) -> impl Iterator<Item = &Ancestor> {
        self.entries.iter().filter_map(|e| match e {
            ChainEntry::Ancestor(a) => Some(a),
            _ => None,
        })
    }

    /// Ancestor ids, furthest first.
    pub fn ancestor_ids(&self) -> Vec<&str> {
        self.ancestors().map(|a| a.id.as_str()).collect()
    }

    /// Where a cycle was detected, if it was.
    pub fn cycle_at(&self) -> Option<&str> {
        self.entries.iter().find_map(|e| match e {
            ChainEntry::CycleDetected { at } => Some(at.as_str()),
            _ => None,
        })
    }

    pub fn is_truncated(&self) -> bool {
        self.entries.iter().any(|e| matches!(e, ChainEntry::Truncated))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for roots and for members whose inviter is unknown.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Walk `parent_of` from `member_id` toward the root.
///
/// Stops at the root, after `max_depth` ancestors, or on the first revisited
/// id. The result never exceeds `max_depth + 1` entries.
pub fn resolve(
    member_id: &str,
    parent_of: &HashMap<String, String>,
    directory: &MemberDirectory,
    max_depth: usize,
) -> UpstreamChain {
    let mut nearest_first: Vec<ChainEntry> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(member_id);

    let mut sentinel = None;
    let mut current = member_id;

    while let Some(parent) = parent_of.get(current) {
        if !visited.insert(parent.as_str()) {
            events::upstream_cycle_detected(member_id, parent);
            sentinel = Some(ChainEntry::CycleDetected { at: parent.clone() });
            break;
        }
        if nearest_first.len() >= max_depth {
            events::traversal_truncated("upstream", member_id, max_depth);
            sentinel = Some(ChainEntry::Truncated);
            break;
        }

        let display_name = directory.name_of(parent).map(str::to_string);
        nearest_first.push(ChainEntry::Ancestor(Ancestor {
            id: parent.clone(),
            departed: display_name.is_none(),
            display_name,
        }));
        current = parent.as_str();
    }

    let mut entries = Vec::with_capacity(nearest_first.len() + 1);
    entries.extend(sentinel);
    entries.extend(nearest_first.into_iter().rev());

    UpstreamChain {
        member_id: member_id.to_string(),
        entries,
    }
}
