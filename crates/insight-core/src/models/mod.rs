pub mod command;
pub mod delivery;
pub mod graph;
pub mod member;
pub mod snapshot;
pub mod topology;

pub use command::{Command, CommandKind};
pub use delivery::{KickReport, OutboundMessage, RenderArtifact, RenderRequest};
pub use graph::{GraphEdge, GraphNode, NodeRole, RelationshipGraph};
pub use member::MemberRecord;
pub use snapshot::GroupSnapshot;
pub use topology::{GraphShape, LayoutEngine, LayoutPlan, Topology};
