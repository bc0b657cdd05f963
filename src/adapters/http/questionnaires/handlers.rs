//! HTTP handlers for questionnaire endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::{parse_id, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    GetQuestionnaireProgressQuery, RecordAnswerCommand, SendQuestionnaireCommand,
    SubmitQuestionnaireCommand,
};
use crate::domain::foundation::QuestionnaireId;

use super::dto::{ProgressParams, RecordAnswersRequest, SendQuestionnaireRequest};

/// POST /api/questionnaires - Send a template to a client
pub async fn send_questionnaire(
    State(state): State<AppState>,
    Json(request): Json<SendQuestionnaireRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SendQuestionnaireCommand {
        client_id: parse_id(&request.client_id, "client ID")?,
        template_id: parse_id(&request.template_id, "template ID")?,
        expires_in_days: request.expires_in_days,
    };

    let questionnaire = state.send_questionnaire_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(questionnaire)))
}

/// PUT /api/questionnaires/:id/answers - Save one or more answers
pub async fn record_answers(
    State(state): State<AppState>,
    Path(questionnaire_id): Path<String>,
    Json(request): Json<RecordAnswersRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let questionnaire_id: QuestionnaireId = parse_id(&questionnaire_id, "questionnaire ID")?;
    let answers = request.into_input()?;

    let questionnaire = state
        .record_answer_handler()
        .handle(RecordAnswerCommand {
            questionnaire_id,
            answers,
        })
        .await?;

    Ok(Json(questionnaire))
}

/// POST /api/questionnaires/:id/submit - Final submission
pub async fn submit_questionnaire(
    State(state): State<AppState>,
    Path(questionnaire_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let questionnaire_id: QuestionnaireId = parse_id(&questionnaire_id, "questionnaire ID")?;

    let questionnaire = state
        .submit_questionnaire_handler()
        .handle(SubmitQuestionnaireCommand { questionnaire_id })
        .await?;

    Ok(Json(questionnaire))
}

/// GET /api/questionnaires/:id/progress?index=N - Navigation state
pub async fn get_progress(
    State(state): State<AppState>,
    Path(questionnaire_id): Path<String>,
    Query(params): Query<ProgressParams>,
) -> Result<impl IntoResponse, ApiError> {
    let questionnaire_id: QuestionnaireId = parse_id(&questionnaire_id, "questionnaire ID")?;

    let progress = state
        .progress_handler()
        .handle(GetQuestionnaireProgressQuery {
            questionnaire_id,
            current_index: params.index,
        })
        .await?;

    Ok(Json(progress))
}
