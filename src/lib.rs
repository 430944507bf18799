//! Rede das Lutas, Brincadeiras e Habilidades
//!
//! A small web tool that records relationships between lutas, brincadeiras
//! and habilidades and serves an interactive visualization of the resulting
//! network: nodes colored by category or by detected community (Louvain),
//! sized by degree, with per-relation filtering.
//!
//! Records live in a single JSON file, rewritten wholesale on each change;
//! the graph is rebuilt from the file on every request. Community detection
//! lives in the `rede-communities` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use rede_lutas::graph::{build_graph, filter_by_relation, Relation};
//! use rede_lutas::model::Record;
//!
//! let mut record = Record::new("Judô", "Queda de braço");
//! record.add_skills("hab_tecnicas_of", ["projetar"]);
//!
//! let graph = build_graph(&[record]);
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//!
//! let bh_only = filter_by_relation(&graph, &[Relation::BH]);
//! assert_eq!(bh_only.node_count(), 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod catalog;
pub mod config;
pub mod graph;
pub mod http;
pub mod model;
pub mod store;
pub mod viz;

// Re-export main types for convenience
pub use algo::{detect_communities, Partition};
pub use catalog::{load_catalog, Catalog};
pub use config::AppConfig;
pub use graph::{
    build_graph, filter_by_node_kind, filter_by_relation, Edge, EdgeId, Graph, GraphError,
    GraphResult, Node, NodeId, NodeKind, Relation, SubCat, SubTipo,
};
pub use http::HttpServer;
pub use model::{Record, ValidationError};
pub use store::{upsert, RecordStore, StoreError, StoreResult};
pub use viz::{build_payload, GraphPayload, ViewMode};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, env!("CARGO_PKG_VERSION"));
    }
}
