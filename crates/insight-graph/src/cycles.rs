//! petgraph view of an assembled graph, used for cycle diagnostics.
//!
//! The upstream and downstream walks already tolerate cycles; this reports
//! them so malformed backend data is visible in the logs.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

use insight_core::models::RelationshipGraph;

/// Directed inviter → invitee graph keyed by member id.
pub struct InviteDigraph {
    pub graph: StableGraph<String, (), Directed>,
}

impl InviteDigraph {
    pub fn from_relationships(relationships: &RelationshipGraph) -> Self {
        let mut graph = StableGraph::with_capacity(
            relationships.node_count(),
            relationships.edge_count(),
        );
        let mut node_index: HashMap<String, NodeIndex> = HashMap::with_capacity(relationships.node_count());

        for node in &relationships.nodes {
            let idx = graph.add_node(node.id.clone());
            node_index.insert(node.id.clone(), idx);
        }
        for edge in &relationships.edges {
            if let (Some(&from), Some(&to)) =
                (node_index.get(&edge.inviter), node_index.get(&edge.invitee))
            {
                graph.add_edge(from, to, ());
            }
        }

        Self { graph }
    }
}

/// Strongly connected components with more than one node, i.e. invite cycles.
///
/// Each component is sorted, and components are sorted by their first id.
pub fn find_cycles(relationships: &RelationshipGraph) -> Vec<Vec<String>> {
    let indexed = InviteDigraph::from_relationships(relationships);
    let mut cycles: Vec<Vec<String>> = tarjan_scc(&indexed.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            let mut ids: Vec<String> = scc
                .into_iter()
                .filter_map(|idx| indexed.graph.node_weight(idx).cloned())
                .collect();
            ids.sort();
            ids
        })
        .collect();
    cycles.sort();
    cycles
}
