//! Derived graph views
//!
//! Both filters drop nodes that end up without an incident edge, which makes
//! relation filtering and kind filtering commute: either order yields the
//! edges passing both predicates plus their endpoints.

use super::store::Graph;
use super::types::{NodeKind, Relation};

/// Keep only edges whose relation is in `allowed`; a node survives iff it is
/// an endpoint of at least one surviving edge.
pub fn filter_by_relation(graph: &Graph, allowed: &[Relation]) -> Graph {
    let mut out = Graph::new();
    for edge in graph.edges() {
        if !allowed.contains(&edge.rel) {
            continue;
        }
        let (a, b) = match (graph.node(edge.source), graph.node(edge.target)) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };
        let na = out.ensure_node(&a.name, a.kind);
        let nb = out.ensure_node(&b.name, b.kind);
        let _ = out.add_edge(na, nb, edge.rel);
    }
    out
}

/// Keep only edges whose endpoints both satisfy `keep`; surviving nodes are
/// the endpoints of surviving edges.
pub fn filter_by_node_kind<F>(graph: &Graph, keep: F) -> Graph
where
    F: Fn(&NodeKind) -> bool,
{
    let mut out = Graph::new();
    for edge in graph.edges() {
        let (a, b) = match (graph.node(edge.source), graph.node(edge.target)) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };
        if !keep(&a.kind) || !keep(&b.kind) {
            continue;
        }
        let na = out.ensure_node(&a.name, a.kind);
        let nb = out.ensure_node(&b.name, b.kind);
        let _ = out.add_edge(na, nb, edge.rel);
    }
    out
}
