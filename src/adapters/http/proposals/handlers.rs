//! HTTP handlers for proposal endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::{parse_id, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CreateProposalCommand, PreviewScheduleQuery, RespondToProposalCommand, StartCheckoutCommand,
};
use crate::domain::foundation::{ProposalId, ServiceId, Timestamp};

use super::dto::{
    CheckoutResponse, CreateProposalRequest, CreateProposalResponse, RespondRequest,
    SchedulePreviewRequest, ScheduleResponse,
};

/// POST /api/proposals/schedule-preview - Compute a schedule without saving
pub async fn preview_schedule(
    State(state): State<AppState>,
    Json(request): Json<SchedulePreviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let start = request.start.unwrap_or_else(Timestamp::now);
    let schedule = state
        .preview_schedule_handler()
        .handle(PreviewScheduleQuery {
            terms: request.terms,
            start: Some(start),
        })
        .await?;

    Ok(Json(ScheduleResponse::anchored(&schedule, start)))
}

/// POST /api/proposals - Create a proposal for a client
pub async fn create_proposal(
    State(state): State<AppState>,
    Json(request): Json<CreateProposalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let client_id = parse_id(&request.client_id, "client ID")?;
    let selected_services = request
        .selected_services
        .iter()
        .map(|raw| parse_id::<ServiceId>(raw, "service ID"))
        .collect::<Result<Vec<_>, _>>()?;

    let cmd = CreateProposalCommand {
        client_id,
        title: request.title,
        selected_services,
        custom_services: request.custom_services.into_iter().map(Into::into).collect(),
        terms: request.terms,
        expires_in_days: request.expires_in_days,
    };

    let result = state.create_proposal_handler().handle(cmd).await?;
    let response = CreateProposalResponse {
        schedule: ScheduleResponse::anchored(&result.schedule, result.proposal.created_at),
        proposal: result.proposal,
        price_breakdown: result.price_breakdown,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/proposals/:id/respond - Accept or reject a proposal
pub async fn respond_to_proposal(
    State(state): State<AppState>,
    Path(proposal_id): Path<String>,
    Json(request): Json<RespondRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let proposal_id: ProposalId = parse_id(&proposal_id, "proposal ID")?;

    let proposal = state
        .respond_to_proposal_handler()
        .handle(RespondToProposalCommand {
            proposal_id,
            decision: request.decision,
        })
        .await?;

    Ok(Json(proposal))
}

/// POST /api/proposals/:id/checkout - Open a hosted checkout session
pub async fn start_checkout(
    State(state): State<AppState>,
    Path(proposal_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let proposal_id: ProposalId = parse_id(&proposal_id, "proposal ID")?;

    let session = state
        .start_checkout_handler()
        .handle(StartCheckoutCommand { proposal_id })
        .await?;

    Ok(Json(CheckoutResponse {
        session_id: session.id,
        checkout_url: session.url,
        expires_at: session.expires_at,
    }))
}
