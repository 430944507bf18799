//! Graph construction from records
//!
//! Nodes are deduplicated across records, which is what reveals shared
//! skills: a habilidade used by several brincadeiras becomes a single node
//! with edges to each of them.

use super::store::Graph;
use super::types::{NodeKind, Relation};
use crate::catalog;
use crate::model::Record;
use tracing::debug;

/// Build the full network from the record list.
///
/// Per record: ensure luta and brincadeira nodes and the LB edge, then for
/// every non-blank skill in every known group, ensure a habilidade node
/// tagged with the group's sub_tipo/sub_cat and add both the BH and the LH
/// edge. Record order does not affect the result.
pub fn build_graph(records: &[Record]) -> Graph {
    let mut graph = Graph::new();

    for record in records {
        let luta_name = record.luta.trim();
        let brinc_name = record.brincadeira.trim();
        if luta_name.is_empty() || brinc_name.is_empty() {
            // validated at submission time; never materialize blank nodes
            continue;
        }

        let luta = graph.ensure_node(luta_name, NodeKind::Luta);
        let brinc = graph.ensure_node(brinc_name, NodeKind::Brincadeira);
        let _ = graph.add_edge(luta, brinc, Relation::LB);

        for (group, names) in &record.skills {
            let spec = match catalog::group_spec(group) {
                Some(spec) => spec,
                None => {
                    debug!(%group, "unknown skill group in record, skipping");
                    continue;
                }
            };
            let kind = NodeKind::Habilidade {
                sub_tipo: spec.sub_tipo,
                sub_cat: spec.sub_cat,
            };

            for name in names {
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                let hab = graph.ensure_node(name, kind);
                // BH and LH always travel together
                let _ = graph.add_edge(brinc, hab, Relation::BH);
                let _ = graph.add_edge(luta, hab, Relation::LH);
            }
        }
    }

    graph
}
