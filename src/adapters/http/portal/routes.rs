//! Route configuration for portal endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{get_catalog, get_engagement, record_open};

/// Creates the portal router, nested under `/api/portal`.
pub fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/opens", post(record_open))
        .route("/:client_id/catalog", get(get_catalog))
        .route("/:client_id/engagement", get(get_engagement))
}
