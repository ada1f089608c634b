//! Per-snapshot analysis façade.
//!
//! `InsightEngine` holds the traversal and topology settings; `analyze`
//! builds the relationship index and member directory once for a snapshot
//! and every query on the returned `GroupAnalysis` reuses them.

use std::sync::Arc;

use insight_core::config::{InsightConfig, TopologyConfig, TraversalConfig};
use insight_core::errors::{InsightError, InsightResult};
use insight_core::models::{
    GraphShape, GroupSnapshot, LayoutPlan, RelationshipGraph, RenderRequest, Topology,
};
use insight_observability::events;

use crate::directory::MemberDirectory;
use crate::index::RelationshipIndex;
use crate::report::NetworkReport;
use crate::traversal::{downstream, upstream, DownstreamSet, UpstreamChain};
use crate::{assembler, cycles, topology};

/// Stateless entry point; cheap to clone and share.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    traversal: TraversalConfig,
    topology: TopologyConfig,
}

impl InsightEngine {
    pub fn new(traversal: TraversalConfig, topology: TopologyConfig) -> Self {
        Self {
            traversal,
            topology,
        }
    }

    pub fn from_config(config: &InsightConfig) -> Self {
        Self::new(config.traversal.clone(), config.topology.clone())
    }

    pub fn traversal_config(&self) -> &TraversalConfig {
        &self.traversal
    }

    /// Index a snapshot. Never fails; data anomalies are recorded on the index.
    pub fn analyze(&self, snapshot: Arc<GroupSnapshot>) -> GroupAnalysis {
        let index = RelationshipIndex::build(&snapshot.members);
        let directory = MemberDirectory::from_members(&snapshot.members);
        GroupAnalysis {
            snapshot,
            index,
            directory,
            traversal: self.traversal.clone(),
            topology: self.topology.clone(),
        }
    }
}

/// A snapshot with its index built.
#[derive(Debug, Clone)]
pub struct GroupAnalysis {
    snapshot: Arc<GroupSnapshot>,
    index: RelationshipIndex,
    directory: MemberDirectory,
    traversal: TraversalConfig,
    topology: TopologyConfig,
}

impl GroupAnalysis {
    pub fn snapshot(&self) -> &GroupSnapshot {
        &self.snapshot
    }

    pub fn index(&self) -> &RelationshipIndex {
        &self.index
    }

    pub fn directory(&self) -> &MemberDirectory {
        &self.directory
    }

    pub fn is_member(&self, member_id: &str) -> bool {
        self.directory.contains(member_id)
    }

    /// Display name of a current member, or the id itself.
    pub fn display_name<'a>(&'a self, member_id: &'a str) -> &'a str {
        self.directory.name_of(member_id).unwrap_or(member_id)
    }

    pub fn upstream(&self, member_id: &str) -> UpstreamChain {
        upstream::resolve(
            member_id,
            self.index.parent_of(),
            &self.directory,
            self.traversal.max_depth,
        )
    }

    pub fn downstream(&self, member_id: &str) -> DownstreamSet {
        downstream::resolve(
            member_id,
            self.index.parent_of(),
            self.index.children_of(),
            &self.directory,
            self.traversal.max_nodes,
        )
    }

    /// Upstream and downstream of a current member.
    pub fn network(&self, member_id: &str) -> InsightResult<NetworkReport> {
        if !self.is_member(member_id) {
            return Err(InsightError::MemberNotFound {
                member_id: member_id.to_string(),
                group_id: self.snapshot.group_id.clone(),
            });
        }
        Ok(NetworkReport {
            member_id: member_id.to_string(),
            member_name: self.display_name(member_id).to_string(),
            upstream: self.upstream(member_id),
            downstream: self.downstream(member_id),
        })
    }

    pub fn assemble(&self) -> RelationshipGraph {
        assembler::assemble(&self.snapshot.members, &self.index)
    }

    pub fn classify(&self) -> Topology {
        topology::classify(
            self.index.children_of(),
            self.directory.len(),
            &self.topology,
        )
    }

    /// Assemble, classify and pick a layout for the renderer.
    pub fn render_plan(&self) -> RenderRequest {
        let graph = self.assemble();
        let group_id = self.snapshot.group_id.as_str();

        let found = cycles::find_cycles(&graph);
        if !found.is_empty() {
            let largest = found.iter().map(Vec::len).max().unwrap_or(0);
            events::graph_cycles_found(group_id, found.len(), largest);
        }

        let topology = self.classify();
        let shape = match topology.shape {
            GraphShape::Tree => "tree",
            GraphShape::Star => "star",
        };
        events::topology_classified(group_id, shape, topology.max_fanout, self.directory.len());

        let layout = LayoutPlan::for_topology(&topology);
        RenderRequest {
            group_id: self.snapshot.group_id.clone(),
            group_name: self.snapshot.group_name.clone(),
            graph,
            topology,
            layout,
        }
    }
}
