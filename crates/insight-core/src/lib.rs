//! # insight-core
//!
//! Foundation crate for the group insight engine.
//! Defines member and snapshot models, the assembled relationship graph,
//! collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::InsightConfig;
pub use errors::{InsightError, InsightResult};
pub use models::{Command, GroupSnapshot, MemberRecord, RelationshipGraph};
