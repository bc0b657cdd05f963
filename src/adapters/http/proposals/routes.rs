//! Route configuration for proposal endpoints.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{create_proposal, preview_schedule, respond_to_proposal, start_checkout};

/// Creates the proposal router, nested under `/api/proposals`.
///
/// Routes:
/// - `POST /schedule-preview` - Price terms without saving
/// - `POST /` - Create a proposal
/// - `POST /:id/respond` - Accept or reject
/// - `POST /:id/checkout` - Start checkout for an accepted proposal
pub fn proposal_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_proposal))
        .route("/schedule-preview", post(preview_schedule))
        .route("/:id/respond", post(respond_to_proposal))
        .route("/:id/checkout", post(start_checkout))
}
