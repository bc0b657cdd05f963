//! HTTP error mapping.
//!
//! Module errors become `{ "error": { "code", "message", "details" } }`.
//!
//! | Kind | Status |
//! |------|--------|
//! | validation | 400 |
//! | not found | 404 |
//! | state conflict, expiry | 409 |
//! | checkout gateway | 502 |
//! | infrastructure | 500 |

use std::str::FromStr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::client::ClientError;
use crate::domain::content::PortalError;
use crate::domain::foundation::ErrorCode;
use crate::domain::proposal::ProposalError;
use crate::domain::questionnaire::QuestionnaireError;

/// Error envelope returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code for programmatic handling.
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Error returned from HTTP handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                code: code.to_string(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.body.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::ValidationFailed, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Parses an identifier taken from a path segment or request body.
pub fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} format", what)))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = %self.body.code, message = %self.body.message, "Request failed");
        }
        (self.status, Json(ErrorResponse { error: self.body })).into_response()
    }
}

impl From<ProposalError> for ApiError {
    fn from(err: ProposalError) -> Self {
        let status = match &err {
            ProposalError::NotFound(_) | ProposalError::ClientNotFound(_) => StatusCode::NOT_FOUND,
            ProposalError::InvalidTerms(_) | ProposalError::ValidationFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            ProposalError::Expired(_) | ProposalError::InvalidState { .. } => StatusCode::CONFLICT,
            ProposalError::CheckoutFailed { .. } => StatusCode::BAD_GATEWAY,
            ProposalError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let details = match &err {
            ProposalError::InvalidTerms(pricing) => Some(json!({ "field": pricing.field() })),
            ProposalError::ValidationFailed { field, .. } => Some(json!({ "field": field })),
            ProposalError::CheckoutFailed { retryable, .. } => {
                Some(json!({ "retryable": retryable }))
            }
            _ => None,
        };
        let api = ApiError::new(status, err.code(), err.message());
        match details {
            Some(details) => api.with_details(details),
            None => api,
        }
    }
}

impl From<QuestionnaireError> for ApiError {
    fn from(err: QuestionnaireError) -> Self {
        let status = match &err {
            QuestionnaireError::NotFound(_)
            | QuestionnaireError::TemplateNotFound(_)
            | QuestionnaireError::ClientNotFound(_) => StatusCode::NOT_FOUND,
            QuestionnaireError::UnknownQuestion(_)
            | QuestionnaireError::InvalidAnswer { .. }
            | QuestionnaireError::IncompleteRequired { .. }
            | QuestionnaireError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            QuestionnaireError::Expired(_) | QuestionnaireError::AlreadyCompleted(_) => {
                StatusCode::CONFLICT
            }
            QuestionnaireError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let details = match &err {
            QuestionnaireError::IncompleteRequired { missing } => Some(json!({ "missing": missing })),
            QuestionnaireError::InvalidAnswer { question_id, .. }
            | QuestionnaireError::UnknownQuestion(question_id) => {
                Some(json!({ "question_id": question_id }))
            }
            QuestionnaireError::ValidationFailed { field, .. } => Some(json!({ "field": field })),
            _ => None,
        };
        let api = ApiError::new(status, err.code(), err.message());
        match details {
            Some(details) => api.with_details(details),
            None => api,
        }
    }
}

impl From<PortalError> for ApiError {
    fn from(err: PortalError) -> Self {
        let status = if err.code().is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        ApiError::new(status, err.code(), err.message())
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::NotFound(_) => {
                ApiError::new(StatusCode::NOT_FOUND, err.code(), err.message())
            }
            ClientError::ValidationFailed { field, .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, err.code(), err.message())
                    .with_details(json!({ "field": field }))
            }
            ClientError::Infrastructure(_) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, err.code(), err.message())
            }
        }
    }
}
