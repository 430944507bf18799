//! Shared utilities for community detection
//!
//! Provides a read-only, optimized view of an undirected graph topology for
//! algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected graph using Compressed
/// Sparse Row (CSR) format. Each undirected edge appears in the neighbor
/// list of both endpoints.
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor node indices
    pub targets: Vec<usize>,

    /// Edge weights: aligned with `targets`. None means unit weights.
    pub weights: Option<Vec<f64>>,
}

impl GraphView {
    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbors of a node
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Get weights for the incident edges of a node
    pub fn edge_weights(&self, idx: usize) -> Option<&[f64]> {
        self.weights.as_ref().map(|w| {
            let start = self.offsets[idx];
            let end = self.offsets[idx + 1];
            &w[start..end]
        })
    }

    /// Weight of the incident edges of `idx`, paired with the neighbor index
    pub fn weighted_neighbors(&self, idx: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        (start..end).map(move |e| {
            let w = self.weights.as_ref().map(|w| w[e]).unwrap_or(1.0);
            (self.targets[e], w)
        })
    }

    /// Total edge weight of the graph (each undirected edge counted once)
    pub fn total_weight(&self) -> f64 {
        let directed: f64 = match &self.weights {
            Some(w) => w.iter().sum(),
            None => self.targets.len() as f64,
        };
        directed / 2.0
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Helper to create a GraphView from adjacency lists
    pub fn from_adjacency_list(
        node_count: usize,
        index_to_node: Vec<NodeId>,
        node_to_index: HashMap<NodeId, usize>,
        neighbors: Vec<Vec<usize>>,
        weights: Option<Vec<Vec<f64>>>,
    ) -> Self {
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();
        let mut flat_weights = if weights.is_some() { Some(Vec::new()) } else { None };

        offsets.push(0);
        for (i, adj) in neighbors.into_iter().enumerate() {
            targets.extend(adj);
            offsets.push(targets.len());

            if let Some(ref mut w_flat) = flat_weights {
                if let Some(w_row) = weights.as_ref().map(|w| &w[i]) {
                    w_flat.extend(w_row.iter());
                }
            }
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
            weights: flat_weights,
        }
    }
}
