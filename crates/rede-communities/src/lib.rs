pub mod common;
pub mod louvain;

pub use common::{GraphView, NodeId};
pub use louvain::{louvain, modularity, LouvainResult};
