//! Presentation mapping
//!
//! Pure styling: graph attributes plus current degree in, colors/sizes/
//! tooltips out. Degree-dependent sizing means styles are computed per
//! filtered view and never cached. Rendering itself happens in the embedded
//! frontend (vis-network).

use crate::algo::Partition;
use crate::graph::{Graph, NodeKind, Relation, SubTipo};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const COLOR_LUTA: &str = "#1f77b4";
pub const COLOR_BRINCADEIRA: &str = "#2ca02c";
pub const COLOR_TECNICA: &str = "#ff7f0e";
pub const COLOR_TATICA: &str = "#9467bd";

/// Color for cluster view when no partition is available
const COLOR_SEM_CLUSTER: &str = "#777777";

/// Cluster palette, indexed by community id modulo length
pub const CLUSTER_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Color by node category (luta/brincadeira/técnica/tática)
    #[default]
    Categoria,
    /// Color by detected community
    Cluster,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "categoria" => Ok(ViewMode::Categoria),
            "cluster" => Ok(ViewMode::Cluster),
            other => Err(format!("unknown view: {other}")),
        }
    }
}

/// Visual style of one node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeStyle {
    pub color: String,
    pub size: u32,
    pub title: String,
}

fn node_size(degree: usize) -> u32 {
    (10 + 4 * degree as u32).max(10)
}

/// Style for the by-category view
pub fn style_for_node(kind: &NodeKind, degree: usize) -> NodeStyle {
    let color = match kind {
        NodeKind::Luta => COLOR_LUTA,
        NodeKind::Brincadeira => COLOR_BRINCADEIRA,
        NodeKind::Habilidade { sub_tipo, .. } => match sub_tipo {
            SubTipo::Tecnica => COLOR_TECNICA,
            SubTipo::Tatica => COLOR_TATICA,
        },
    };
    NodeStyle {
        color: color.to_string(),
        size: node_size(degree),
        title: format!("{} • grau: {}", kind.tipo(), degree),
    }
}

/// Style for the by-cluster view
pub fn style_for_cluster(cluster: Option<usize>, degree: usize) -> NodeStyle {
    let color = match cluster {
        Some(g) => CLUSTER_PALETTE[g % CLUSTER_PALETTE.len()],
        None => COLOR_SEM_CLUSTER,
    };
    let title = match cluster {
        Some(g) => format!("cluster {} • grau: {}", g, degree),
        None => format!("grau: {}", degree),
    };
    NodeStyle {
        color: color.to_string(),
        size: node_size(degree),
        title,
    }
}

/// A node as the frontend renderer consumes it
#[derive(Debug, Clone, Serialize)]
pub struct VizNode {
    pub id: String,
    pub label: String,
    pub color: String,
    pub size: u32,
    pub title: String,
}

/// An edge as the frontend renderer consumes it
#[derive(Debug, Clone, Serialize)]
pub struct VizEdge {
    pub from: String,
    pub to: String,
    pub rel: Relation,
}

/// The "Resumo" panel counts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub nodes: usize,
    pub edges: usize,
    pub lutas: usize,
    pub brincadeiras: usize,
    pub habilidades_tecnicas: usize,
    pub habilidades_taticas: usize,
}

/// Everything the visualization page needs for one render
#[derive(Debug, Clone, Serialize)]
pub struct GraphPayload {
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
    pub summary: Summary,
}

/// Map a (possibly filtered) graph to its renderable payload
pub fn build_payload(graph: &Graph, view: ViewMode, partition: Option<&Partition>) -> GraphPayload {
    let mut summary = Summary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        ..Summary::default()
    };

    let mut nodes = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        match &node.kind {
            NodeKind::Luta => summary.lutas += 1,
            NodeKind::Brincadeira => summary.brincadeiras += 1,
            NodeKind::Habilidade { sub_tipo, .. } => match sub_tipo {
                SubTipo::Tecnica => summary.habilidades_tecnicas += 1,
                SubTipo::Tatica => summary.habilidades_taticas += 1,
            },
        }

        let degree = graph.degree(node.id);
        let style = match view {
            ViewMode::Categoria => style_for_node(&node.kind, degree),
            ViewMode::Cluster => {
                style_for_cluster(partition.and_then(|p| p.get(&node.id).copied()), degree)
            }
        };
        nodes.push(VizNode {
            id: node.name.clone(),
            label: node.label().to_string(),
            color: style.color,
            size: style.size,
            title: style.title,
        });
    }

    let edges = graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let from = graph.node(edge.source)?.name.clone();
            let to = graph.node(edge.target)?.name.clone();
            Some(VizEdge {
                from,
                to,
                rel: edge.rel,
            })
        })
        .collect();

    GraphPayload {
        nodes,
        edges,
        summary,
    }
}
