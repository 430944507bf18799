//! The in-memory network: typed nodes, relation-tagged undirected edges,
//! construction from records, and derived filtered views.

pub mod builder;
pub mod edge;
pub mod filter;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use builder::build_graph;
pub use edge::Edge;
pub use filter::{filter_by_node_kind, filter_by_relation};
pub use node::Node;
pub use store::{Graph, GraphError, GraphResult};
pub use types::{EdgeId, NodeId, NodeKind, Relation, SubCat, SubTipo};
