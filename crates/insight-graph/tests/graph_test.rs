//! Behavioral tests for the invite graph engine.

use std::collections::HashMap;
use std::sync::Arc;

use insight_core::config::{TopologyConfig, TraversalConfig};
use insight_core::errors::InsightError;
use insight_core::models::{GraphShape, GroupSnapshot, MemberRecord, NodeRole};
use insight_graph::traversal::{downstream, upstream};
use insight_graph::{cycles, topology, ChainEntry, InsightEngine, MemberDirectory, RelationshipIndex};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn member(id: &str, inviter: Option<&str>) -> MemberRecord {
    let record = MemberRecord::new(id).with_name(id.to_uppercase());
    match inviter {
        Some(inviter) => record.invited_by(inviter),
        None => record,
    }
}

/// A → B → C → D.
fn chain() -> Vec<MemberRecord> {
    vec![
        member("a", None),
        member("b", Some("a")),
        member("c", Some("b")),
        member("d", Some("c")),
    ]
}

fn engine() -> InsightEngine {
    InsightEngine::default()
}

fn analyze(members: Vec<MemberRecord>) -> insight_graph::GroupAnalysis {
    engine().analyze(Arc::new(GroupSnapshot::new("g@chatroom", "Group", members)))
}

fn fan(inviter: &str, count: usize) -> Vec<MemberRecord> {
    (0..count)
        .map(|i| member(&format!("{inviter}_{i:03}"), Some(inviter)))
        .collect()
}

// ===========================================================================
// Index
// ===========================================================================

#[test]
fn index_build_is_idempotent() {
    let members = chain();
    assert_eq!(RelationshipIndex::build(&members), RelationshipIndex::build(&members));
}

#[test]
fn duplicate_invitee_keeps_the_later_inviter() {
    let index = RelationshipIndex::build(&[
        member("a", None),
        member("b", None),
        member("x", Some("a")),
        member("x", Some("b")),
    ]);
    assert_eq!(index.parent("x"), Some("b"));
    assert_eq!(index.edge_count(), 1);
    assert_eq!(index.children("b"), ["x"]);
    assert!(index.children("a").is_empty());
    assert_eq!(index.anomalies().len(), 1);
    assert_eq!(index.anomalies()[0].kind(), "conflicting_inviter");
}

#[test]
fn children_of_mirrors_parent_of() {
    let index = RelationshipIndex::build(&[
        member("a", None),
        member("b", Some("a")),
        member("c", Some("a")),
        member("c", Some("b")),
        member("d", Some("d")),
        member("", Some("a")),
    ]);
    for (child, parent) in index.parent_of() {
        assert!(index.children(parent).contains(child));
    }
    let listed: usize = index.children_of().values().map(Vec::len).sum();
    assert_eq!(listed, index.parent_of().len());
    assert_eq!(index.parent("d"), None);
}

// ===========================================================================
// Upstream
// ===========================================================================

#[test]
fn upstream_of_chain_tail_is_furthest_first() {
    let analysis = analyze(chain());
    let chain = analysis.upstream("d");
    assert_eq!(chain.ancestor_ids(), ["a", "b", "c"]);
    assert!(chain.cycle_at().is_none());
    assert!(!chain.is_truncated());
}

#[test]
fn upstream_of_root_is_empty() {
    assert!(analyze(chain()).upstream("a").is_empty());
}

#[test]
fn upstream_cycle_terminates_with_sentinel() {
    let analysis = analyze(vec![member("a", Some("b")), member("b", Some("a"))]);
    let chain = analysis.upstream("a");
    assert_eq!(chain.cycle_at(), Some("a"));
    assert_eq!(chain.ancestor_ids(), ["b"]);
    assert!(matches!(chain.entries[0], ChainEntry::CycleDetected { .. }));
}

#[test]
fn upstream_marks_departed_ancestors() {
    let analysis = analyze(vec![member("b", Some("gone")), member("c", Some("b"))]);
    let chain = analysis.upstream("c");
    let ancestors: Vec<_> = chain.ancestors().collect();
    assert_eq!(ancestors.len(), 2);
    assert_eq!(ancestors[0].id, "gone");
    assert!(ancestors[0].departed);
    assert_eq!(ancestors[0].display_name, None);
    assert!(!ancestors[1].departed);
    assert_eq!(ancestors[1].display_name.as_deref(), Some("B"));
}

#[test]
fn upstream_depth_guard_truncates_long_chains() {
    let mut members = vec![member("m0", None)];
    for i in 1..=20 {
        members.push(member(&format!("m{i}"), Some(&format!("m{}", i - 1))));
    }
    let index = RelationshipIndex::build(&members);
    let directory = MemberDirectory::from_members(&members);

    let chain = upstream::resolve("m20", index.parent_of(), &directory, 5);
    assert!(chain.is_truncated());
    assert_eq!(chain.len(), 6);
    assert_eq!(chain.ancestor_ids(), ["m15", "m16", "m17", "m18", "m19"]);
    assert_eq!(chain.entries[0], ChainEntry::Truncated);

    // Exactly max_depth ancestors to the root is not a truncation.
    let chain = upstream::resolve("m5", index.parent_of(), &directory, 5);
    assert!(!chain.is_truncated());
    assert_eq!(chain.len(), 5);
}

// ===========================================================================
// Downstream
// ===========================================================================

#[test]
fn downstream_of_chain_head_is_everyone_else() {
    let analysis = analyze(chain());
    let set = analysis.downstream("a");
    assert_eq!(set.ids(), ["b", "c", "d"]);
    assert_eq!(set.name_of("c"), Some("C"));
    assert!(!set.contains("a"));
    assert!(!set.truncated);
}

#[test]
fn downstream_is_breadth_first() {
    let analysis = analyze(vec![
        member("r", None),
        member("x", Some("r")),
        member("x1", Some("x")),
        member("y", Some("r")),
    ]);
    assert_eq!(analysis.downstream("r").ids(), ["x", "y", "x1"]);
}

#[test]
fn downstream_excludes_departed_children() {
    let members = vec![member("a", None), member("b", Some("a"))];
    let index = RelationshipIndex::build(&members);
    // `b` has left since the index was built.
    let directory = MemberDirectory::from_members(&members[..1]);
    let set = downstream::resolve(
        "a",
        index.parent_of(),
        index.children_of(),
        &directory,
        500,
    );
    assert!(set.is_empty());
}

#[test]
fn downstream_skips_children_listed_under_the_wrong_parent() {
    let members = vec![member("a", None), member("b", None), member("c", Some("b"))];
    let parent_of: HashMap<String, String> = [("c".to_string(), "b".to_string())].into();
    let children_of: HashMap<String, Vec<String>> = [("a".to_string(), vec!["c".to_string()])].into();
    let directory = MemberDirectory::from_members(&members);

    let set = downstream::resolve("a", &parent_of, &children_of, &directory, 500);
    assert!(set.is_empty());
}

#[test]
fn downstream_terminates_on_cycles() {
    let analysis = analyze(vec![
        member("a", Some("c")),
        member("b", Some("a")),
        member("c", Some("b")),
    ]);
    let set = analysis.downstream("a");
    assert_eq!(set.ids(), ["b", "c"]);
}

#[test]
fn downstream_truncates_at_max_nodes() {
    let mut members = vec![member("hub", None)];
    members.extend(fan("hub", 10));
    let index = RelationshipIndex::build(&members);
    let directory = MemberDirectory::from_members(&members);

    let set = downstream::resolve("hub", index.parent_of(), index.children_of(), &directory, 4);
    assert_eq!(set.len(), 4);
    assert!(set.truncated);

    let set = downstream::resolve("hub", index.parent_of(), index.children_of(), &directory, 10);
    assert_eq!(set.len(), 10);
    assert!(!set.truncated);
}

// ===========================================================================
// Topology
// ===========================================================================

#[test]
fn sixteen_of_twenty_is_a_star() {
    let mut children = HashMap::new();
    children.insert("hub".to_string(), (0..16).map(|i| i.to_string()).collect::<Vec<_>>());
    let result = topology::classify(&children, 20, &TopologyConfig::default());
    assert_eq!(result.shape, GraphShape::Star);
    assert_eq!(result.root_hint.as_deref(), Some("hub"));
    assert_eq!(result.max_fanout, 16);
}

#[test]
fn twenty_of_hundred_is_a_tree() {
    let mut children = HashMap::new();
    children.insert("hub".to_string(), (0..20).map(|i| i.to_string()).collect::<Vec<_>>());
    let result = topology::classify(&children, 100, &TopologyConfig::default());
    assert_eq!(result.shape, GraphShape::Tree);
    assert_eq!(result.root_hint, None);
}

#[test]
fn classifier_is_pure() {
    let mut members = vec![member("hub", None)];
    members.extend(fan("hub", 16));
    members.extend(fan("other", 3));
    let index = RelationshipIndex::build(&members);
    let config = TopologyConfig::default();
    let first = topology::classify(index.children_of(), 20, &config);
    let second = topology::classify(index.children_of(), 20, &config);
    assert_eq!(first, second);
}

#[test]
fn thresholds_come_from_config() {
    let mut children = HashMap::new();
    children.insert("hub".to_string(), vec!["x".to_string(), "y".to_string()]);
    let config = TopologyConfig {
        absolute_threshold: 2,
        ratio_threshold: 0.5,
    };
    assert_eq!(topology::classify(&children, 4, &config).shape, GraphShape::Star);
    assert_eq!(topology::classify(&children, 5, &config).shape, GraphShape::Tree);
}

// ===========================================================================
// Assembler
// ===========================================================================

#[test]
fn every_edge_endpoint_is_a_node() {
    let analysis = analyze(vec![
        member("a", Some("gone")),
        member("b", Some("a")),
        member("c", None),
        member("c", Some("c")),
    ]);
    let graph = analysis.assemble();
    for edge in &graph.edges {
        assert!(graph.contains(&edge.inviter), "dangling inviter {}", edge.inviter);
        assert!(graph.contains(&edge.invitee), "dangling invitee {}", edge.invitee);
    }
}

#[test]
fn nodes_carry_roles() {
    let graph = analyze(vec![member("a", Some("gone")), member("b", Some("a")), member("r", None)])
        .assemble();
    assert_eq!(graph.node("gone").map(|n| n.role), Some(NodeRole::Departed));
    assert_eq!(graph.node("a").map(|n| n.role), Some(NodeRole::Member));
    assert_eq!(graph.node("r").map(|n| n.role), Some(NodeRole::Root));
    assert_eq!(graph.roots(), ["r"]);
    assert_eq!(graph.departed(), ["gone"]);
}

#[test]
fn assembly_is_deterministic_and_sorted() {
    let members = vec![
        member("z", Some("m")),
        member("m", None),
        member("b", Some("m")),
        member("a", Some("z")),
    ];
    let first = analyze(members.clone()).assemble();
    let second = analyze(members).assemble();
    assert_eq!(first, second);

    let ids: Vec<&str> = first.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "m", "z"]);
    let edges: Vec<(&str, &str)> = first
        .edges
        .iter()
        .map(|e| (e.inviter.as_str(), e.invitee.as_str()))
        .collect();
    assert_eq!(edges, [("m", "b"), ("m", "z"), ("z", "a")]);
}

#[test]
fn blank_display_name_is_dropped() {
    let graph = analyze(vec![MemberRecord::new("a").with_name("  ")]).assemble();
    assert_eq!(graph.node("a").and_then(|n| n.display_name.clone()), None);
}

// ===========================================================================
// Cycles
// ===========================================================================

#[test]
fn cycle_components_are_reported() {
    let graph = analyze(vec![
        member("a", Some("b")),
        member("b", Some("a")),
        member("c", Some("a")),
    ])
    .assemble();
    assert_eq!(cycles::find_cycles(&graph), vec![vec!["a".to_string(), "b".to_string()]]);
}

// ===========================================================================
// Engine
// ===========================================================================

#[test]
fn network_of_unknown_member_fails() {
    let err = analyze(chain()).network("nobody").unwrap_err();
    assert!(matches!(err, InsightError::MemberNotFound { ref member_id, .. } if member_id == "nobody"));
}

#[test]
fn network_report_renders_both_directions() {
    let report = analyze(chain()).network("b").unwrap();
    assert_eq!(report.member_name, "B");
    assert_eq!(report.upstream_line().as_deref(), Some("A (a)"));
    let text = report.to_text();
    assert!(text.contains("(2 total)"));
    assert!(text.contains("- C (c)\n- D (d)\n"));
}

#[test]
fn render_plan_for_star_group_is_radial() {
    let mut members = vec![member("hub", None)];
    members.extend(fan("hub", 16));
    members.extend(vec![member("o1", None), member("o2", None), member("o3", None)]);
    let plan = analyze(members).render_plan();
    assert_eq!(plan.topology.shape, GraphShape::Star);
    assert_eq!(plan.layout.engine.graphviz_name(), "twopi");
    assert_eq!(plan.layout.root.as_deref(), Some("hub"));
    assert_eq!(plan.graph.node_count(), 20);
    assert_eq!(plan.group_name, "Group");
    assert_eq!(plan.artifact_stem(), "invite_tree_g_");
}

#[test]
fn engine_limits_come_from_config() {
    let engine = InsightEngine::new(
        TraversalConfig {
            max_depth: 1,
            max_nodes: 1,
        },
        TopologyConfig::default(),
    );
    let analysis = engine.analyze(Arc::new(GroupSnapshot::new("g", "G", chain())));
    assert!(analysis.upstream("d").is_truncated());
    assert!(analysis.downstream("a").truncated);
    assert_eq!(analysis.downstream("a").len(), 1);
}
