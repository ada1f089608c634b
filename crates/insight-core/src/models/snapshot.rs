//! Point-in-time capture of a group's membership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::member::MemberRecord;

/// Immutable membership snapshot of one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub group_id: String,
    pub group_name: String,
    /// Members in the order the backend returned them.
    pub members: Vec<MemberRecord>,
    /// When the backend answered.
    pub fetched_at: DateTime<Utc>,
}

impl GroupSnapshot {
    pub fn new(
        group_id: impl Into<String>,
        group_name: impl Into<String>,
        members: Vec<MemberRecord>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            group_name: group_name.into(),
            members,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether `member_id` is currently in the group.
    pub fn contains(&self, member_id: &str) -> bool {
        self.members.iter().any(|m| m.id == member_id)
    }

    /// Look up a member record. The last record wins if the id repeats.
    pub fn member(&self, member_id: &str) -> Option<&MemberRecord> {
        self.members.iter().rev().find(|m| m.id == member_id)
    }

    /// Display name of `member_id`, falling back to the id itself.
    pub fn display_name_of<'a>(&'a self, member_id: &'a str) -> &'a str {
        self.member(member_id)
            .map(MemberRecord::effective_name)
            .unwrap_or(member_id)
    }
}
