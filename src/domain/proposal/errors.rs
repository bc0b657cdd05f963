//! Proposal-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound / ClientNotFound | 404 |
//! | InvalidTerms / ValidationFailed | 400 |
//! | Expired / InvalidState | 409 |
//! | CheckoutFailed | 502 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, ProposalId, ValidationError};
use crate::domain::pricing::PricingError;

/// Proposal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalError {
    /// Proposal was not found.
    NotFound(ProposalId),

    /// The owning client does not exist.
    ClientNotFound(ClientId),

    /// Payment terms cannot produce a schedule.
    InvalidTerms(PricingError),

    /// Proposal passed its expiry date.
    Expired(ProposalId),

    /// Operation not allowed from the current status.
    InvalidState { current: String, attempted: String },

    /// Field-level validation failure.
    ValidationFailed { field: String, message: String },

    /// Checkout session could not be created; the proposal is unaffected.
    CheckoutFailed { reason: String, retryable: bool },

    /// Infrastructure error.
    Infrastructure(String),
}

impl ProposalError {
    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        ProposalError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProposalError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProposalError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProposalError::NotFound(_) => ErrorCode::ProposalNotFound,
            ProposalError::ClientNotFound(_) => ErrorCode::ClientNotFound,
            ProposalError::InvalidTerms(_) => ErrorCode::InvalidPaymentTerms,
            ProposalError::Expired(_) => ErrorCode::ProposalExpired,
            ProposalError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            ProposalError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProposalError::CheckoutFailed { .. } => ErrorCode::ExternalServiceError,
            ProposalError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            ProposalError::NotFound(id) => format!("Proposal not found: {}", id),
            ProposalError::ClientNotFound(id) => format!("Client not found: {}", id),
            ProposalError::InvalidTerms(err) => format!("Invalid payment terms: {}", err),
            ProposalError::Expired(id) => format!("Proposal {} has expired", id),
            ProposalError::InvalidState { current, attempted } => {
                format!("Cannot {} a proposal that is {}", attempted, current)
            }
            ProposalError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProposalError::CheckoutFailed { reason, .. } => {
                format!("Checkout could not be started: {}", reason)
            }
            ProposalError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if the caller may offer a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProposalError::CheckoutFailed { retryable, .. } => *retryable,
            ProposalError::Infrastructure(_) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ProposalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProposalError {}

impl From<PricingError> for ProposalError {
    fn from(err: PricingError) -> Self {
        ProposalError::InvalidTerms(err)
    }
}

impl From<ValidationError> for ProposalError {
    fn from(err: ValidationError) -> Self {
        ProposalError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ProposalError {
    fn from(err: DomainError) -> Self {
        ProposalError::Infrastructure(err.to_string())
    }
}
