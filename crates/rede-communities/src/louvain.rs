//! Louvain community detection
//!
//! Greedy modularity optimization in two phases (local moving + aggregation),
//! repeated until no merge improves modularity. Deterministic: nodes are
//! visited in index order and ties keep the current community, so the same
//! input always produces the same partition.

use crate::common::{GraphView, NodeId};
use std::collections::HashMap;

/// Result of the Louvain algorithm
pub struct LouvainResult {
    /// Map of Community ID -> List of NodeIds
    pub communities: HashMap<usize, Vec<NodeId>>,
    /// Map of NodeId -> Community ID
    pub node_community: HashMap<NodeId, usize>,
    /// Modularity of the final partition
    pub modularity: f64,
}

/// Minimum modularity gain required to move a node
const MIN_GAIN: f64 = 1e-7;

/// Safety cap on local-moving sweeps per level
const MAX_SWEEPS: usize = 100;

/// Intermediate multigraph for one aggregation level.
///
/// `adj` is symmetric (each inter-node edge appears in both endpoint lists);
/// self-loop weight is kept separately and counts twice in a node's degree.
struct LevelGraph {
    adj: Vec<Vec<(usize, f64)>>,
    self_loops: Vec<f64>,
}

impl LevelGraph {
    fn from_view(view: &GraphView) -> Self {
        let n = view.node_count;
        let mut adj = vec![Vec::new(); n];
        let mut self_loops = vec![0.0; n];
        for i in 0..n {
            for (j, w) in view.weighted_neighbors(i) {
                if j == i {
                    // a self edge appears twice in a symmetric view
                    self_loops[i] += w / 2.0;
                } else {
                    adj[i].push((j, w));
                }
            }
        }
        LevelGraph { adj, self_loops }
    }

    fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Weighted degree, self-loops counted twice
    fn degree(&self, i: usize) -> f64 {
        2.0 * self.self_loops[i] + self.adj[i].iter().map(|&(_, w)| w).sum::<f64>()
    }
}

/// One local-moving phase. Returns the community assignment (labels are
/// arbitrary indices in 0..n) and whether any node moved.
fn one_level(g: &LevelGraph) -> (Vec<usize>, bool) {
    let n = g.node_count();
    let mut community: Vec<usize> = (0..n).collect();
    let k: Vec<f64> = (0..n).map(|i| g.degree(i)).collect();
    let m2: f64 = k.iter().sum();
    if m2 == 0.0 {
        return (community, false);
    }

    let mut tot = k.clone();
    let mut improved = false;

    for _ in 0..MAX_SWEEPS {
        let mut moved = false;

        for i in 0..n {
            let old = community[i];

            // weight from i to each neighboring community
            let mut neigh: HashMap<usize, f64> = HashMap::new();
            for &(j, w) in &g.adj[i] {
                *neigh.entry(community[j]).or_insert(0.0) += w;
            }

            tot[old] -= k[i];
            let mut best = old;
            let mut best_gain = neigh.get(&old).copied().unwrap_or(0.0) - k[i] * tot[old] / m2;

            // sorted candidates keep the result independent of hash order
            let mut candidates: Vec<(usize, f64)> = neigh.into_iter().collect();
            candidates.sort_by_key(|&(c, _)| c);
            for (c, w) in candidates {
                if c == old {
                    continue;
                }
                let gain = w - k[i] * tot[c] / m2;
                if gain > best_gain + MIN_GAIN {
                    best_gain = gain;
                    best = c;
                }
            }
            tot[best] += k[i];

            if best != old {
                community[i] = best;
                moved = true;
                improved = true;
            }
        }

        if !moved {
            break;
        }
    }

    (community, improved)
}

/// Collapse communities into super-nodes. Returns the aggregated graph and
/// the dense relabeling (old community label -> new node index).
fn aggregate(g: &LevelGraph, community: &[usize]) -> (LevelGraph, Vec<usize>) {
    let n = g.node_count();

    // renumber communities by first appearance in node order
    let mut renumber = vec![usize::MAX; n];
    let mut next = 0;
    for i in 0..n {
        let c = community[i];
        if renumber[c] == usize::MAX {
            renumber[c] = next;
            next += 1;
        }
    }

    let mut self_loops = vec![0.0; next];
    let mut inter: HashMap<(usize, usize), f64> = HashMap::new();

    for i in 0..n {
        let cu = renumber[community[i]];
        self_loops[cu] += g.self_loops[i];
        for &(j, w) in &g.adj[i] {
            let cv = renumber[community[j]];
            if cu == cv {
                // symmetric adjacency counts each intra edge twice
                self_loops[cu] += w / 2.0;
            } else {
                *inter.entry((cu, cv)).or_insert(0.0) += w;
            }
        }
    }

    let mut adj = vec![Vec::new(); next];
    let mut entries: Vec<((usize, usize), f64)> = inter.into_iter().collect();
    entries.sort_by_key(|&(key, _)| key);
    for ((cu, cv), w) in entries {
        adj[cu].push((cv, w));
    }

    (LevelGraph { adj, self_loops }, renumber)
}

/// Modularity of an assignment (dense index -> community label) over a view
pub fn modularity(view: &GraphView, assignment: &[usize]) -> f64 {
    let g = LevelGraph::from_view(view);
    let n = g.node_count();
    let k: Vec<f64> = (0..n).map(|i| g.degree(i)).collect();
    let m2: f64 = k.iter().sum();
    if m2 == 0.0 {
        return 0.0;
    }

    let mut intra: HashMap<usize, f64> = HashMap::new();
    let mut tot: HashMap<usize, f64> = HashMap::new();
    for i in 0..n {
        let c = assignment[i];
        *tot.entry(c).or_insert(0.0) += k[i];
        *intra.entry(c).or_insert(0.0) += 2.0 * g.self_loops[i];
        for &(j, w) in &g.adj[i] {
            if assignment[j] == c {
                *intra.entry(c).or_insert(0.0) += w;
            }
        }
    }

    tot.iter()
        .map(|(c, &t)| intra.get(c).copied().unwrap_or(0.0) / m2 - (t / m2).powi(2))
        .sum()
}

/// Louvain community detection
///
/// Returns a partition of all nodes into communities numbered densely from 0,
/// in order of first appearance by node index. A graph with no edges yields
/// one singleton community per node.
pub fn louvain(view: &GraphView) -> LouvainResult {
    let n = view.node_count;
    let mut g = LevelGraph::from_view(view);
    let mut assignment: Vec<usize> = (0..n).collect();

    loop {
        let (community, improved) = one_level(&g);
        if !improved {
            break;
        }

        let level_nodes = g.node_count();
        let (next, renumber) = aggregate(&g, &community);
        for a in assignment.iter_mut() {
            *a = renumber[community[*a]];
        }
        g = next;

        if g.node_count() == level_nodes {
            break;
        }
    }

    // final dense renumbering by first appearance
    let mut relabel: HashMap<usize, usize> = HashMap::new();
    let mut communities: HashMap<usize, Vec<NodeId>> = HashMap::new();
    let mut node_community = HashMap::new();
    let mut final_assignment = vec![0usize; n];

    for i in 0..n {
        let next_label = relabel.len();
        let label = *relabel.entry(assignment[i]).or_insert(next_label);
        final_assignment[i] = label;
        let node_id = view.index_to_node[i];
        communities.entry(label).or_default().push(node_id);
        node_community.insert(node_id, label);
    }

    let modularity = modularity(view, &final_assignment);

    LouvainResult {
        communities,
        node_community,
        modularity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a symmetric view from an undirected edge list over 0..n
    fn view_from_edges(n: usize, edges: &[(usize, usize)]) -> GraphView {
        let index_to_node: Vec<NodeId> = (0..n as u64).collect();
        let mut node_to_index = HashMap::new();
        for (i, &id) in index_to_node.iter().enumerate() {
            node_to_index.insert(id, i);
        }
        let mut neighbors = vec![Vec::new(); n];
        for &(u, v) in edges {
            neighbors[u].push(v);
            neighbors[v].push(u);
        }
        GraphView::from_adjacency_list(n, index_to_node, node_to_index, neighbors, None)
    }

    #[test]
    fn test_single_edge_merges() {
        let view = view_from_edges(2, &[(0, 1)]);
        let result = louvain(&view);
        assert_eq!(result.communities.len(), 1);
        assert_eq!(result.node_community[&0], result.node_community[&1]);
    }

    #[test]
    fn test_no_edges_yields_singletons() {
        let view = view_from_edges(3, &[]);
        let result = louvain(&view);
        assert_eq!(result.communities.len(), 3);
        assert_eq!(result.modularity, 0.0);
    }

    #[test]
    fn test_two_cliques_bridged() {
        // two 4-cliques joined by a single bridge edge
        let mut edges = Vec::new();
        for u in 0..4 {
            for v in (u + 1)..4 {
                edges.push((u, v));
                edges.push((u + 4, v + 4));
            }
        }
        edges.push((0, 4));

        let view = view_from_edges(8, &edges);
        let result = louvain(&view);

        assert_eq!(result.communities.len(), 2);
        for v in 1..4 {
            assert_eq!(result.node_community[&0], result.node_community[&(v as u64)]);
        }
        for v in 5..8 {
            assert_eq!(result.node_community[&4], result.node_community[&(v as u64)]);
        }
        assert_ne!(result.node_community[&0], result.node_community[&4]);
        assert!(result.modularity > 0.3);
    }

    #[test]
    fn test_disconnected_components_stay_apart() {
        let view = view_from_edges(4, &[(0, 1), (2, 3)]);
        let result = louvain(&view);
        assert_eq!(result.communities.len(), 2);
        assert_ne!(result.node_community[&0], result.node_community[&2]);
    }

    #[test]
    fn test_deterministic() {
        let view = view_from_edges(5, &[(0, 1), (1, 2), (2, 0), (3, 4)]);
        let a = louvain(&view);
        let b = louvain(&view);
        assert_eq!(a.node_community, b.node_community);
        // community ids are dense and ordered by first appearance
        assert_eq!(a.node_community[&0], 0);
    }

    #[test]
    fn test_partition_beats_singletons() {
        let view = view_from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let result = louvain(&view);
        let singletons: Vec<usize> = (0..6).collect();
        assert!(result.modularity > modularity(&view, &singletons));
    }
}
