//! HTTP handlers for client endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::{parse_id, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CreateClientCommand, DeleteClientCommand, GetClientStatusQuery, ListClientsQuery,
    UpdateClientStatusCommand,
};
use crate::domain::foundation::ClientId;

use super::dto::{
    parse_status, ClientSummaryResponse, CreateClientRequest, ListClientsParams,
    UpdateStatusRequest,
};

/// POST /api/clients - Register a client
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let client = state
        .create_client_handler()
        .handle(CreateClientCommand {
            contact: request.contact,
            open_portal: request.open_portal,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients?status= - Roster, optionally filtered by stored status
pub async fn list_clients(
    State(state): State<AppState>,
    Query(params): Query<ListClientsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let status = params.status.as_deref().map(parse_status).transpose()?;

    let overviews = state
        .list_clients_handler()
        .handle(ListClientsQuery { status })
        .await?;

    let response: Vec<ClientSummaryResponse> = overviews.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// GET /api/clients/:id/status - Stored status and lifecycle suggestion
pub async fn get_client_status(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let client_id: ClientId = parse_id(&client_id, "client ID")?;

    let overview = state
        .client_status_handler()
        .handle(GetClientStatusQuery { client_id })
        .await?;

    Ok(Json(ClientSummaryResponse::from(overview)))
}

/// PUT /api/clients/:id/status - Operator sets the status
pub async fn update_client_status(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let client_id: ClientId = parse_id(&client_id, "client ID")?;
    let status = parse_status(&request.status)?;

    let client = state
        .update_client_status_handler()
        .handle(UpdateClientStatusCommand { client_id, status })
        .await?;

    Ok(Json(client))
}

/// DELETE /api/clients/:id - Remove a client and everything it owns
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let client_id: ClientId = parse_id(&client_id, "client ID")?;

    let deleted = state
        .delete_client_handler()
        .handle(DeleteClientCommand { client_id })
        .await?;

    Ok(Json(deleted))
}
