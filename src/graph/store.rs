//! In-memory graph storage
//!
//! Set semantics throughout: nodes are deduplicated by name, edges by the
//! unordered endpoint pair plus relation. The graph is ephemeral; it is
//! rebuilt from the record store on every request and never mutated in place
//! after construction.

use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeId, NodeId, NodeKind, Relation};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Undirected, attributed graph over named entities
#[derive(Debug, Default)]
pub struct Graph {
    /// Node storage; NodeId is the index into this vector
    nodes: Vec<Node>,

    /// Edge storage; EdgeId is the index into this vector
    edges: Vec<Edge>,

    /// Name index for node identity
    by_name: FxHashMap<String, NodeId>,

    /// Incident edges per node (adjacency list)
    incident: Vec<Vec<EdgeId>>,

    /// Dedup set over (min endpoint, max endpoint, relation)
    edge_keys: FxHashSet<(NodeId, NodeId, Relation)>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph::default()
    }

    /// Get or create the node with the given name.
    ///
    /// On repeat calls the kind is overwritten; kinds are derived
    /// deterministically from the same name, so the write is idempotent.
    pub fn ensure_node(&mut self, name: &str, kind: NodeKind) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            self.nodes[id.as_u64() as usize].kind = kind;
            return id;
        }
        let id = NodeId::new(self.nodes.len() as u64);
        self.nodes.push(Node::new(id, name, kind));
        self.incident.push(Vec::new());
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Add an undirected edge. Returns `Ok(None)` if the same edge (either
    /// endpoint order, same relation) already exists.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        rel: Relation,
    ) -> GraphResult<Option<EdgeId>> {
        if source.as_u64() as usize >= self.nodes.len() {
            return Err(GraphError::NodeNotFound(source));
        }
        if target.as_u64() as usize >= self.nodes.len() {
            return Err(GraphError::NodeNotFound(target));
        }

        let key = (source.min(target), source.max(target), rel);
        if !self.edge_keys.insert(key) {
            return Ok(None);
        }

        let id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Edge::new(id, source, target, rel));
        self.incident[source.as_u64() as usize].push(id);
        if source != target {
            self.incident[target.as_u64() as usize].push(id);
        }
        Ok(Some(id))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_u64() as usize)
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.by_name.get(name).and_then(|&id| self.node(id))
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_u64() as usize)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges incident to a node
    pub fn degree(&self, id: NodeId) -> usize {
        self.incident
            .get(id.as_u64() as usize)
            .map(|edges| edges.len())
            .unwrap_or(0)
    }

    /// Edges incident to a node
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.incident
            .get(id.as_u64() as usize)
            .into_iter()
            .flatten()
            .filter_map(|&eid| self.edge(eid))
    }

    /// Neighbor nodes of a node
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.incident_edges(id)
            .filter_map(move |edge| edge.other(id))
            .filter_map(|other| self.node(other))
    }

    pub fn has_edge_between(&self, a: NodeId, b: NodeId, rel: Relation) -> bool {
        self.edge_keys.contains(&(a.min(b), a.max(b), rel))
    }
}
