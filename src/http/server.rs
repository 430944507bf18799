//! HTTP server for the web interface

use super::handler::{
    catalog_handler, clear_records_handler, graph_handler, list_records_handler,
    status_handler, submit_record_handler, AppState, SharedState,
};
use crate::config::AppConfig;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
struct Assets;

async fn static_handler() -> impl IntoResponse {
    let index_html = Assets::get("index.html").unwrap();
    Html(std::str::from_utf8(index_html.data.as_ref()).unwrap().to_string())
}

/// Build the application router
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(static_handler))
        .route("/api/status", get(status_handler))
        .route("/api/catalog", get(catalog_handler))
        .route(
            "/api/records",
            get(list_records_handler)
                .post(submit_record_handler)
                .delete(clear_records_handler),
        )
        .route("/api/graph", get(graph_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server managing the record API and the embedded page
pub struct HttpServer {
    state: SharedState,
    port: u16,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: AppConfig, port: u16) -> Self {
        Self {
            state: Arc::new(AppState::new(config)),
            port,
        }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> anyhow::Result<()> {
        let app = router(Arc::clone(&self.state));

        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Rede available at http://localhost:{}", self.port);
        info!(
            "Data entry at http://localhost:{}/?page=insercao",
            self.port
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}
