//! Top-level router assembly.

use std::time::Duration;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::clients::client_routes;
use super::portal::portal_routes;
use super::proposals::proposal_routes;
use super::questionnaires::questionnaire_routes;
use super::state::AppState;

/// Builds the full API with request tracing and a per-request timeout.
///
/// CORS is only opened outside production.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let router = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )));

    if server.is_production() {
        router
    } else {
        router.layer(CorsLayer::permissive())
    }
}

/// Routes without middleware; used directly by tests.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/proposals", proposal_routes())
        .nest("/api/questionnaires", questionnaire_routes())
        .nest("/api/portal", portal_routes())
        .nest("/api/clients", client_routes())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
