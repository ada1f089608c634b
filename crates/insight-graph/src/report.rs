//! Plain-text rendering of a member's invite network.

use std::fmt::Write as _;

use insight_core::constants::CHAIN_SEPARATOR;
use serde::Serialize;

use crate::traversal::{ChainEntry, DownstreamSet, UpstreamChain};

/// Upstream chain and downstream set of one member, ready to be sent as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkReport {
    pub member_id: String,
    pub member_name: String,
    pub upstream: UpstreamChain,
    pub downstream: DownstreamSet,
}

impl NetworkReport {
    /// The chain as `"name (id) -> name (id)"`, furthest inviter first.
    ///
    /// `None` when the member has no recorded inviter.
    pub fn upstream_line(&self) -> Option<String> {
        if self.upstream.is_empty() {
            return None;
        }
        let parts: Vec<String> = self.upstream.entries.iter().map(format_entry).collect();
        Some(parts.join(CHAIN_SEPARATOR))
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Invite network of '{} ({})':",
            self.member_name, self.member_id
        );

        out.push_str("\n--- Invited by ---\n");
        match self.upstream_line() {
            Some(line) => {
                out.push_str(&line);
                out.push('\n');
            }
            None => out.push_str("No inviter on record; the member is a root inviter.\n"),
        }

        let _ = writeln!(
            out,
            "\n--- Invited members ({} total) ---",
            self.downstream.len()
        );
        if self.downstream.is_empty() {
            out.push_str("This member has not invited anyone.\n");
        } else {
            for d in self.downstream.iter() {
                let _ = writeln!(out, "- {} ({})", d.display_name, d.id);
            }
            if self.downstream.truncated {
                out.push_str("[list truncated]\n");
            }
        }
        out
    }
}

fn format_entry(entry: &ChainEntry) -> String {
    match entry {
        ChainEntry::Ancestor(a) if a.departed => format!("{} (departed)", a.id),
        ChainEntry::Ancestor(a) => {
            format!("{} ({})", a.display_name.as_deref().unwrap_or(&a.id), a.id)
        }
        ChainEntry::CycleDetected { at } => format!("[cycle detected at {at}]"),
        ChainEntry::Truncated => "[path truncated]".to_string(),
    }
}
