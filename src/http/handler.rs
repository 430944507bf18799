//! HTTP handlers for the record API and the visualization payload
//!
//! Every request recomputes from the backing file: reload records, rebuild
//! the graph, refilter, optionally re-cluster. Nothing is cached between
//! requests.

use crate::algo::detect_communities;
use crate::catalog::load_catalog;
use crate::config::AppConfig;
use crate::graph::{build_graph, filter_by_relation, Relation};
use crate::model::Record;
use crate::store::{upsert, RecordStore};
use crate::viz::{build_payload, GraphPayload, ViewMode};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Shared per-process state
pub struct AppState {
    pub config: AppConfig,
    /// Serializes the load-modify-save cycle of in-process writers
    pub write_lock: Mutex<()>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        AppState {
            config,
            write_lock: Mutex::new(()),
        }
    }

    fn store(&self) -> RecordStore {
        RecordStore::new(self.config.records_path())
    }
}

pub type SharedState = Arc<AppState>;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Handler for system status
pub async fn status_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let records = state.store().load();
    let graph = build_graph(&records);
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "storage": {
            "records": records.len(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        }
    }))
}

/// Handler for the skill catalog (feeds the data-entry form)
pub async fn catalog_handler(State(state): State<SharedState>) -> impl IntoResponse {
    Json(load_catalog(state.config.data_dir()))
}

/// Handler listing the current records
pub async fn list_records_handler(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.store().load())
}

/// Handler for a new submission: validate, upsert, persist
pub async fn submit_record_handler(
    State(state): State<SharedState>,
    Json(record): Json<Record>,
) -> Response {
    if let Err(err) = record.validate(state.config.allow_empty_skills) {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string());
    }

    let _guard = state.write_lock.lock().await;
    let store = state.store();
    let records = upsert(store.load(), record);
    match store.save(&records) {
        Ok(()) => {
            info!(count = records.len(), "record submitted");
            Json(json!({ "records": records.len() })).into_response()
        }
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

/// Handler clearing the store ("Limpar Rede")
pub async fn clear_records_handler(State(state): State<SharedState>) -> Response {
    let _guard = state.write_lock.lock().await;
    match state.store().clear() {
        Ok(()) => {
            info!("record store cleared");
            Json(json!({ "records": 0 })).into_response()
        }
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

/// Query parameters of the graph endpoint
#[derive(Debug, Default, Deserialize)]
pub struct GraphQuery {
    /// `categoria` (default) or `cluster`
    pub view: Option<String>,
    /// Comma-separated relation list; absent means all three
    pub rels: Option<String>,
}

fn parse_rels(raw: Option<&str>) -> Result<Vec<Relation>, String> {
    match raw {
        None => Ok(Relation::ALL.to_vec()),
        Some(s) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect(),
    }
}

/// Handler producing the renderable payload for the current view
pub async fn graph_handler(
    State(state): State<SharedState>,
    Query(query): Query<GraphQuery>,
) -> Result<Json<GraphPayload>, Response> {
    let view: ViewMode = query
        .view
        .as_deref()
        .unwrap_or("")
        .parse()
        .map_err(|err: String| error_response(StatusCode::BAD_REQUEST, err))?;
    let rels = parse_rels(query.rels.as_deref())
        .map_err(|err| error_response(StatusCode::BAD_REQUEST, err))?;

    let records = state.store().load();
    let graph = filter_by_relation(&build_graph(&records), &rels);

    let partition = match view {
        ViewMode::Cluster => Some(detect_communities(&graph)),
        ViewMode::Categoria => None,
    };

    Ok(Json(build_payload(&graph, view, partition.as_ref())))
}
