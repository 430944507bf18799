//! Node implementation for the network
//!
//! A node is an entity of the tripartite network: a luta, a brincadeira, or a
//! habilidade. Identity is the entity name; two nodes with the same name are
//! the same node regardless of which record mentioned them.

use super::types::{NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// A node in the network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Entity name; unique within a graph
    pub name: String,

    /// Node category and skill attributes
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>, kind: NodeKind) -> Self {
        Node {
            id,
            name: name.into(),
            kind,
        }
    }

    /// Display label; equal to the entity name
    pub fn label(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{SubCat, SubTipo};

    #[test]
    fn test_create_node() {
        let node = Node::new(NodeId::new(1), "Judô", NodeKind::Luta);
        assert_eq!(node.id, NodeId::new(1));
        assert_eq!(node.label(), "Judô");
        assert_eq!(node.kind.tipo(), "luta");
    }

    #[test]
    fn test_node_equality_by_id() {
        let node1 = Node::new(NodeId::new(7), "projetar", NodeKind::Luta);
        let node2 = Node::new(NodeId::new(7), "projetar", NodeKind::Brincadeira);
        let node3 = Node::new(NodeId::new(8), "projetar", NodeKind::Luta);

        assert_eq!(node1, node2);
        assert_ne!(node1, node3);
    }

    #[test]
    fn test_node_serialization_flattens_kind() {
        let node = Node::new(
            NodeId::new(3),
            "marcação",
            NodeKind::Habilidade {
                sub_tipo: SubTipo::Tatica,
                sub_cat: Some(SubCat::Defensiva),
            },
        );
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["name"], "marcação");
        assert_eq!(json["tipo"], "habilidade");
        assert_eq!(json["sub_tipo"], "tatica");
    }
}
