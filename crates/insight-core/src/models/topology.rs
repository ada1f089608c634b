//! Topology classification result and the layout parameters derived from it.

use serde::{Deserialize, Serialize};

/// Overall shape of an invite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphShape {
    /// Layered hierarchy; rendered top to bottom.
    Tree,
    /// Dominated by one super-inviter; rendered radially around it.
    Star,
}

/// Output of topology classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub shape: GraphShape,
    /// Center of the radial layout. Only set for `Star`.
    pub root_hint: Option<String>,
    /// Largest number of direct invitees of a single inviter.
    pub max_fanout: usize,
}

/// Layout family handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEngine {
    /// Layered layout (graphviz `dot`).
    Layered,
    /// Radial layout (graphviz `twopi`).
    Radial,
}

impl LayoutEngine {
    /// Graphviz engine name.
    pub fn graphviz_name(&self) -> &'static str {
        match self {
            Self::Layered => "dot",
            Self::Radial => "twopi",
        }
    }
}

/// Renderer-agnostic layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub engine: LayoutEngine,
    /// Rank direction for layered layouts (`TB`).
    pub rank_dir: Option<String>,
    /// Center node for radial layouts.
    pub root: Option<String>,
    pub node_sep: f64,
    pub rank_sep: f64,
}

const LAYERED_RANK_DIR: &str = "TB";
const NODE_SEP: f64 = 0.8;
const LAYERED_RANK_SEP: f64 = 1.2;
const RADIAL_RANK_SEP: f64 = 2.0;

impl LayoutPlan {
    /// Layout parameters for a classified graph.
    pub fn for_topology(topology: &Topology) -> Self {
        match topology.shape {
            GraphShape::Tree => Self {
                engine: LayoutEngine::Layered,
                rank_dir: Some(LAYERED_RANK_DIR.to_string()),
                root: None,
                node_sep: NODE_SEP,
                rank_sep: LAYERED_RANK_SEP,
            },
            GraphShape::Star => Self {
                engine: LayoutEngine::Radial,
                rank_dir: None,
                root: topology.root_hint.clone(),
                node_sep: NODE_SEP,
                rank_sep: RADIAL_RANK_SEP,
            },
        }
    }
}
