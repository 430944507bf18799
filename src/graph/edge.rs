//! Edge implementation for the network
//!
//! Edges are undirected and carry the relation that produced them (LB, BH or
//! LH). The `source`/`target` names follow insertion order only; traversal
//! treats both endpoints symmetrically.

use super::types::{EdgeId, NodeId, Relation};
use serde::{Deserialize, Serialize};

/// An undirected edge in the network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// First endpoint
    pub source: NodeId,

    /// Second endpoint
    pub target: NodeId,

    /// Relation between the endpoints
    pub rel: Relation,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, rel: Relation) -> Self {
        Edge {
            id,
            source,
            target,
            rel,
        }
    }

    /// Check if this edge connects two specific nodes (in either order)
    pub fn connects(&self, node1: NodeId, node2: NodeId) -> bool {
        (self.source == node1 && self.target == node2)
            || (self.source == node2 && self.target == node1)
    }

    /// Check if a node is an endpoint of this edge
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), Relation::LB);
        assert_eq!(edge.id, EdgeId::new(1));
        assert_eq!(edge.rel, Relation::LB);
    }

    #[test]
    fn test_edge_connects_either_order() {
        let edge = Edge::new(EdgeId::new(5), NodeId::new(10), NodeId::new(20), Relation::BH);

        assert!(edge.connects(NodeId::new(10), NodeId::new(20)));
        assert!(edge.connects(NodeId::new(20), NodeId::new(10)));
        assert!(!edge.connects(NodeId::new(10), NodeId::new(30)));
    }

    #[test]
    fn test_edge_other() {
        let edge = Edge::new(EdgeId::new(2), NodeId::new(1), NodeId::new(2), Relation::LH);
        assert_eq!(edge.other(NodeId::new(1)), Some(NodeId::new(2)));
        assert_eq!(edge.other(NodeId::new(2)), Some(NodeId::new(1)));
        assert_eq!(edge.other(NodeId::new(3)), None);
        assert!(edge.touches(NodeId::new(2)));
    }
}
