//! HTTP surface: the query filter behind a small JSON endpoint.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /api/search?q=<query>` | `{"query", "count", "results"}` |
//! | `GET /health` | `ok` |
//!
//! A missing `q` is the empty query and yields an empty result list; a
//! repeated `q` uses its first value. The endpoint never fails a search.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use laylife_core::{SearchIndex, SearchRecord};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    index: Arc<SearchIndex>,
    max_results: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchRecord>,
}

/// Build the router over `index`, capping each response at `max_results`.
pub fn router(index: Arc<SearchIndex>, max_results: usize) -> Router {
    let state = ServerState { index, max_results };

    Router::new()
        .route("/api/search", get(search))
        .route("/health", get(health))
        .with_state(state)
}

async fn search(
    State(state): State<ServerState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<SearchResponse> {
    let query = query_param(params);
    let results: Vec<SearchRecord> = state
        .index
        .search_with_limit(&query, state.max_results)
        .into_iter()
        .cloned()
        .collect();

    info!(query = %query, count = results.len(), "search request");

    Json(SearchResponse {
        count: results.len(),
        query,
        results,
    })
}

/// First `q` value of the query string; a repeated `q` keeps the first.
fn query_param(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

async fn health() -> &'static str {
    "ok"
}

/// Serve `app` on `addr` until Ctrl+C.
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", listener.local_addr()?);
    info!("- Search endpoint: http://{}/api/search?q=", addr);
    info!("- Health endpoint: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
