//! # insight-graph
//!
//! The invite graph engine. Builds parent/children indices from a membership
//! snapshot, answers bounded upstream and downstream queries, classifies the
//! graph's topology for layout selection, and assembles a deterministic
//! node/edge model for rendering.

pub mod assembler;
pub mod cycles;
pub mod directory;
pub mod engine;
pub mod index;
pub mod report;
pub mod topology;
pub mod traversal;

pub use directory::MemberDirectory;
pub use engine::{GroupAnalysis, InsightEngine};
pub use index::{IndexAnomaly, RelationshipIndex};
pub use report::NetworkReport;
pub use traversal::{ChainEntry, DownstreamSet, UpstreamChain};
