//! Id → display name lookup over the current membership.

use std::collections::HashMap;

use insight_core::models::MemberRecord;

/// Current members of a snapshot, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    names: HashMap<String, String>,
}

impl MemberDirectory {
    /// Records with a blank id are not members. A repeated id keeps its last name.
    pub fn from_members(members: &[MemberRecord]) -> Self {
        let names = members
            .iter()
            .filter(|m| !m.id.trim().is_empty())
            .map(|m| (m.id.clone(), m.effective_name().to_string()))
            .collect();
        Self { names }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    /// Display name of a current member.
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_not_members() {
        let dir = MemberDirectory::from_members(&[
            MemberRecord::new("a").with_name("Alice"),
            MemberRecord::new("  "),
        ]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.name_of("a"), Some("Alice"));
        assert!(!dir.contains("  "));
    }

    #[test]
    fn missing_name_falls_back_to_id() {
        let dir = MemberDirectory::from_members(&[MemberRecord::new("b")]);
        assert_eq!(dir.name_of("b"), Some("b"));
    }
}
