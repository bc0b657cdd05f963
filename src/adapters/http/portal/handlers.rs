//! HTTP handlers for client portal endpoints.
//!
//! Portal responses serialize the domain read models directly, so this
//! module has no DTO file of its own.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::{parse_id, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetEngagementQuery, GetPortalCatalogQuery, RecordOpenCommand};
use crate::domain::analytics::TrackedEntity;
use crate::domain::foundation::ClientId;

/// GET /api/portal/:client_id/catalog - Content visible to the client
pub async fn get_catalog(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let client_id: ClientId = parse_id(&client_id, "client ID")?;

    let catalog = state
        .portal_catalog_handler()
        .handle(GetPortalCatalogQuery { client_id })
        .await?;

    Ok(Json(catalog))
}

/// POST /api/portal/opens - Record that a proposal or questionnaire was opened
pub async fn record_open(
    State(state): State<AppState>,
    Json(entity): Json<TrackedEntity>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state
        .record_open_handler()
        .handle(RecordOpenCommand { entity })
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/portal/:client_id/engagement - View counts and rates
pub async fn get_engagement(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let client_id: ClientId = parse_id(&client_id, "client ID")?;

    let engagement = state
        .engagement_handler()
        .handle(GetEngagementQuery { client_id })
        .await?;

    Ok(Json(engagement))
}
