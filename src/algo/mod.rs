//! Clustering adapter
//!
//! Bridges the network to the `rede-communities` crate: snapshots the
//! topology into a dense `GraphView` and runs Louvain. The partition is
//! consumed only for node coloring in the cluster view.

use crate::graph::{Graph, NodeId};
use rede_communities::{louvain, GraphView};
use std::collections::HashMap;

pub use rede_communities::LouvainResult;

/// Node -> community id mapping
pub type Partition = HashMap<NodeId, usize>;

/// Build a dense undirected view of the graph for algorithm execution
pub fn build_view(graph: &Graph) -> GraphView {
    let n = graph.node_count();
    let mut index_to_node = Vec::with_capacity(n);
    let mut node_to_index = HashMap::with_capacity(n);

    for (idx, node) in graph.nodes().iter().enumerate() {
        index_to_node.push(node.id.as_u64());
        node_to_index.insert(node.id.as_u64(), idx);
    }

    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); n];
    for edge in graph.edges() {
        let a = node_to_index[&edge.source.as_u64()];
        let b = node_to_index[&edge.target.as_u64()];
        neighbors[a].push(b);
        neighbors[b].push(a);
    }

    GraphView::from_adjacency_list(n, index_to_node, node_to_index, neighbors, None)
}

/// Detect communities for the cluster view.
///
/// Louvain is undefined on an edgeless graph, so that case short-circuits to
/// the single-cluster mapping without invoking the algorithm.
pub fn detect_communities(graph: &Graph) -> Partition {
    if graph.edge_count() == 0 {
        return graph.nodes().iter().map(|node| (node.id, 0)).collect();
    }

    let view = build_view(graph);
    let result = louvain(&view);
    result
        .node_community
        .into_iter()
        .map(|(id, community)| (NodeId::new(id), community))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::model::Record;

    #[test]
    fn test_edgeless_graph_maps_everything_to_zero() {
        let mut graph = Graph::new();
        graph.ensure_node("a", crate::graph::NodeKind::Luta);
        graph.ensure_node("b", crate::graph::NodeKind::Brincadeira);

        let partition = detect_communities(&graph);
        assert_eq!(partition.len(), 2);
        assert!(partition.values().all(|&c| c == 0));
    }

    #[test]
    fn test_empty_graph_yields_empty_partition() {
        let partition = detect_communities(&Graph::new());
        assert!(partition.is_empty());
    }

    #[test]
    fn test_disconnected_records_split_into_clusters() {
        let mut r1 = Record::new("Judô", "Queda de braço");
        r1.add_skills("hab_tecnicas_of", ["projetar", "derrubar"]);
        let mut r2 = Record::new("Capoeira", "Roda");
        r2.add_skills("hab_taticas_def", ["marcação", "cobertura"]);

        let graph = build_graph(&[r1, r2]);
        let partition = detect_communities(&graph);

        let judo = graph.node_by_name("Judô").unwrap().id;
        let queda = graph.node_by_name("Queda de braço").unwrap().id;
        let capoeira = graph.node_by_name("Capoeira").unwrap().id;
        let roda = graph.node_by_name("Roda").unwrap().id;

        assert_eq!(partition[&judo], partition[&queda]);
        assert_eq!(partition[&capoeira], partition[&roda]);
        assert_ne!(partition[&judo], partition[&capoeira]);
    }

    #[test]
    fn test_view_matches_graph_shape() {
        let mut r = Record::new("Judô", "Queda de braço");
        r.add_skills("hab_tecnicas_of", ["projetar"]);
        let graph = build_graph(&[r]);

        let view = build_view(&graph);
        assert_eq!(view.node_count, 3);
        assert_eq!(view.edge_count(), 3);
    }
}
