//! Client portal error types.

use crate::domain::foundation::{
    ClientId, ContentItemId, DomainError, ErrorCode, ProposalId, QuestionnaireId,
};

/// Errors raised while serving a client portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    ClientNotFound(ClientId),
    ProposalNotFound(ProposalId),
    QuestionnaireNotFound(QuestionnaireId),
    ContentNotFound(ContentItemId),
    Infrastructure(String),
}

impl PortalError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PortalError::ClientNotFound(_) => ErrorCode::ClientNotFound,
            PortalError::ProposalNotFound(_) => ErrorCode::ProposalNotFound,
            PortalError::QuestionnaireNotFound(_) => ErrorCode::QuestionnaireNotFound,
            PortalError::ContentNotFound(_) => ErrorCode::ContentNotFound,
            PortalError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            PortalError::ClientNotFound(id) => format!("Client not found: {}", id),
            PortalError::ProposalNotFound(id) => format!("Proposal not found: {}", id),
            PortalError::QuestionnaireNotFound(id) => format!("Questionnaire not found: {}", id),
            PortalError::ContentNotFound(id) => format!("Content item not found: {}", id),
            PortalError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PortalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PortalError {}

impl From<DomainError> for PortalError {
    fn from(err: DomainError) -> Self {
        PortalError::Infrastructure(err.to_string())
    }
}
