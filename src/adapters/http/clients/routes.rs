//! Route configuration for client endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_client, delete_client, get_client_status, list_clients, update_client_status,
};

/// Creates the client router, nested under `/api/clients`.
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client).get(list_clients))
        .route("/:id", delete(delete_client))
        .route("/:id/status", get(get_client_status).put(update_client_status))
}
