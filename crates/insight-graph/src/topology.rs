//! Degree-distribution heuristic for picking a layout family.
//!
//! A single super-inviter with a large share of the group produces a fan-out
//! that a layered layout renders illegibly; such graphs are drawn radially.

use std::collections::HashMap;

use insight_core::config::TopologyConfig;
use insight_core::models::{GraphShape, Topology};

/// Classify the graph from its direct-children counts.
///
/// Star iff the busiest inviter has at least `absolute_threshold` children
/// and those children make up at least `ratio_threshold` of the group.
pub fn classify(
    children_of: &HashMap<String, Vec<String>>,
    group_size: usize,
    config: &TopologyConfig,
) -> Topology {
    let busiest = children_of
        .iter()
        .map(|(inviter, children)| (inviter.as_str(), children.len()))
        .max_by(|(a_id, a_count), (b_id, b_count)| {
            // Highest count wins; ties go to the smallest id.
            a_count.cmp(b_count).then_with(|| b_id.cmp(a_id))
        });

    let Some((inviter, max_fanout)) = busiest else {
        return tree(0);
    };

    if group_size == 0 {
        return tree(max_fanout);
    }

    let ratio = max_fanout as f64 / group_size as f64;
    if max_fanout >= config.absolute_threshold && ratio >= config.ratio_threshold {
        Topology {
            shape: GraphShape::Star,
            root_hint: Some(inviter.to_string()),
            max_fanout,
        }
    } else {
        tree(max_fanout)
    }
}

fn tree(max_fanout: usize) -> Topology {
    Topology {
        shape: GraphShape::Tree,
        root_hint: None,
        max_fanout,
    }
}
