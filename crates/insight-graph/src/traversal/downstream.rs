//! Downstream walk: "who did this member recursively invite?"

use std::collections::{HashMap, HashSet, VecDeque};

use insight_observability::events;
use serde::Serialize;

use crate::directory::MemberDirectory;

/// A current member reached from the starting member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descendant {
    pub id: String,
    pub display_name: String,
}

/// Descendants in breadth-first discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownstreamSet {
    pub member_id: String,
    pub descendants: Vec<Descendant>,
    /// More eligible descendants existed past the node bound.
    pub truncated: bool,
}

impl DownstreamSet {
    fn empty(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            descendants: Vec::new(),
            truncated: false,
        }
    }

    pub fn len(&self) -> usize {
        self.descendants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descendants.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.descendants.iter().any(|d| d.id == id)
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.descendants
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.display_name.as_str())
    }

    /// Descendant ids in discovery order.
    pub fn ids(&self) -> Vec<&str> {
        self.descendants.iter().map(|d| d.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descendant> {
        self.descendants.iter()
    }
}

/// Breadth-first collection of `member_id`'s descendants.
///
/// A child is taken only if it is unvisited, still a member, and recorded in
/// `parent_of` as a child of the node being expanded. At most `max_nodes`
/// descendants are returned; `member_id` itself never is.
pub fn resolve(
    member_id: &str,
    parent_of: &HashMap<String, String>,
    children_of: &HashMap<String, Vec<String>>,
    directory: &MemberDirectory,
    max_nodes: usize,
) -> DownstreamSet {
    let mut result = DownstreamSet::empty(member_id);

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(member_id);

    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(member_id);

    'walk: while let Some(node) = queue.pop_front() {
        let Some(children) = children_of.get(node) else {
            continue;
        };

        for child in children {
            let child = child.as_str();
            if visited.contains(child) {
                continue;
            }
            let Some(name) = directory.name_of(child) else {
                continue;
            };
            let recorded = parent_of.get(child).map(String::as_str);
            if recorded != Some(node) {
                events::stale_child_skipped(node, child, recorded);
                continue;
            }
            if result.descendants.len() >= max_nodes {
                events::traversal_truncated("downstream", member_id, max_nodes);
                result.truncated = true;
                break 'walk;
            }

            visited.insert(child);
            result.descendants.push(Descendant {
                id: child.to_string(),
                display_name: name.to_string(),
            });
            queue.push_back(child);
        }
    }

    result
}
