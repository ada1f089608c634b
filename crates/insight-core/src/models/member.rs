//! A single group-membership record as delivered by the messaging backend.

use serde::{Deserialize, Serialize};

/// One member of a group, with the member who invited them (if known).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Platform identifier, unique within a snapshot.
    pub id: String,
    /// Nickname shown in the group. May be absent or empty.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Identifier of the inviter. `None` means the member has no recorded inviter.
    #[serde(default)]
    pub inviter: Option<String>,
}

impl MemberRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            inviter: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn invited_by(mut self, inviter: impl Into<String>) -> Self {
        self.inviter = Some(inviter.into());
        self
    }

    /// The nickname, or the identifier when the nickname is missing or empty.
    pub fn effective_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }
}
