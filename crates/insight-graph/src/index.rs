//! Parent/children lookup built once per snapshot.
//!
//! `parent_of` is filled in a single pass over the member records with
//! last-write-wins semantics; `children_of` is then derived from it and never
//! edited on its own, so every child listed under a parent is that parent's
//! recorded child.

use std::collections::{HashMap, HashSet};

use insight_core::models::MemberRecord;
use insight_observability::events;
use serde::Serialize;

/// A record that was skipped or overwrote an earlier mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndexAnomaly {
    /// The member id itself is blank.
    BlankInvitee { position: usize },
    /// The inviter is present but blank.
    BlankInviter { invitee: String },
    /// The member claims to have invited themselves.
    SelfReference { member: String },
    /// A later record for the same member named a different inviter.
    ConflictingInviter {
        invitee: String,
        previous: String,
        current: String,
    },
}

impl IndexAnomaly {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BlankInvitee { .. } => "blank_invitee",
            Self::BlankInviter { .. } => "blank_inviter",
            Self::SelfReference { .. } => "self_reference",
            Self::ConflictingInviter { .. } => "conflicting_inviter",
        }
    }
}

/// Invite relationships of one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipIndex {
    parent_of: HashMap<String, String>,
    children_of: HashMap<String, Vec<String>>,
    anomalies: Vec<IndexAnomaly>,
}

impl RelationshipIndex {
    /// Build the index. Never fails; bad records are skipped and reported.
    pub fn build(members: &[MemberRecord]) -> Self {
        let mut parent_of: HashMap<String, String> = HashMap::with_capacity(members.len());
        let mut anomalies = Vec::new();

        for (position, member) in members.iter().enumerate() {
            let invitee = member.id.as_str();
            if is_blank(invitee) {
                events::index_anomaly("blank_invitee", invitee, member.inviter.as_deref(), "");
                anomalies.push(IndexAnomaly::BlankInvitee { position });
                continue;
            }
            let Some(inviter) = member.inviter.as_deref() else {
                continue;
            };
            if is_blank(inviter) {
                events::index_anomaly("blank_inviter", invitee, Some(inviter), "");
                anomalies.push(IndexAnomaly::BlankInviter {
                    invitee: invitee.to_string(),
                });
                continue;
            }
            if inviter == invitee {
                events::index_anomaly("self_reference", invitee, Some(inviter), "");
                anomalies.push(IndexAnomaly::SelfReference {
                    member: invitee.to_string(),
                });
                continue;
            }

            if let Some(previous) = parent_of.insert(invitee.to_string(), inviter.to_string()) {
                if previous != inviter {
                    events::index_anomaly(
                        "conflicting_inviter",
                        invitee,
                        Some(inviter),
                        &format!("overwrites inviter {previous}"),
                    );
                    anomalies.push(IndexAnomaly::ConflictingInviter {
                        invitee: invitee.to_string(),
                        previous,
                        current: inviter.to_string(),
                    });
                }
            }
        }

        let children_of = derive_children(members, &parent_of);
        events::index_built(members.len(), parent_of.len(), anomalies.len());

        Self {
            parent_of,
            children_of,
            anomalies,
        }
    }

    /// child → parent.
    pub fn parent_of(&self) -> &HashMap<String, String> {
        &self.parent_of
    }

    /// parent → children, in record order.
    pub fn children_of(&self) -> &HashMap<String, Vec<String>> {
        &self.children_of
    }

    pub fn parent(&self, member_id: &str) -> Option<&str> {
        self.parent_of.get(member_id).map(String::as_str)
    }

    pub fn children(&self, member_id: &str) -> &[String] {
        self.children_of
            .get(member_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn anomalies(&self) -> &[IndexAnomaly] {
        &self.anomalies
    }

    /// Number of inviter → invitee relationships.
    pub fn edge_count(&self) -> usize {
        self.parent_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent_of.is_empty()
    }
}

/// Children lists in the order the winning records appear.
fn derive_children(
    members: &[MemberRecord],
    parent_of: &HashMap<String, String>,
) -> HashMap<String, Vec<String>> {
    let mut children_of: HashMap<String, Vec<String>> = HashMap::new();
    let mut placed: HashSet<&str> = HashSet::with_capacity(parent_of.len());

    for member in members {
        let (Some(inviter), Some(parent)) = (member.inviter.as_deref(), parent_of.get(&member.id))
        else {
            continue;
        };
        if inviter != parent || !placed.insert(member.id.as_str()) {
            continue;
        }
        children_of
            .entry(parent.clone())
            .or_default()
            .push(member.id.clone());
    }

    children_of
}

fn is_blank(id: &str) -> bool {
    id.trim().is_empty()
}
