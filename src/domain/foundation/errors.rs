//! Error vocabulary shared by every module.
//!
//! `ValidationError` covers value-object construction. `DomainError` is the
//! port-level error: a stable `ErrorCode`, a message, and string details.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A value object refused its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyField { field: String },

    #[error("{field} must be in {min}..={max} (got {actual})")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("{field}: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Broad class of an error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    External,
    Infrastructure,
}

/// Stable, wire-visible error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    InvalidPaymentTerms,
    IncompleteRequired,
    InvalidAnswer,

    NotFound,
    ClientNotFound,
    ProposalNotFound,
    TemplateNotFound,
    QuestionnaireNotFound,
    ContentNotFound,

    InvalidStateTransition,
    ProposalExpired,
    QuestionnaireExpired,
    QuestionnaireCompleted,

    ExternalServiceError,

    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidPaymentTerms => "INVALID_PAYMENT_TERMS",
            ErrorCode::IncompleteRequired => "INCOMPLETE_REQUIRED",
            ErrorCode::InvalidAnswer => "INVALID_ANSWER",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ClientNotFound => "CLIENT_NOT_FOUND",
            ErrorCode::ProposalNotFound => "PROPOSAL_NOT_FOUND",
            ErrorCode::TemplateNotFound => "TEMPLATE_NOT_FOUND",
            ErrorCode::QuestionnaireNotFound => "QUESTIONNAIRE_NOT_FOUND",
            ErrorCode::ContentNotFound => "CONTENT_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::ProposalExpired => "PROPOSAL_EXPIRED",
            ErrorCode::QuestionnaireExpired => "QUESTIONNAIRE_EXPIRED",
            ErrorCode::QuestionnaireCompleted => "QUESTIONNAIRE_COMPLETED",
            ErrorCode::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            ValidationFailed | EmptyField | OutOfRange | InvalidFormat | InvalidPaymentTerms
            | IncompleteRequired | InvalidAnswer => ErrorKind::Validation,
            NotFound | ClientNotFound | ProposalNotFound | TemplateNotFound
            | QuestionnaireNotFound | ContentNotFound => ErrorKind::NotFound,
            InvalidStateTransition | ProposalExpired | QuestionnaireExpired
            | QuestionnaireCompleted => ErrorKind::Conflict,
            ExternalServiceError => ErrorKind::External,
            DatabaseError | InternalError => ErrorKind::Infrastructure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error crossing a port boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: BTreeMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// Generic validation failure tagged with the offending field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field)
    }

    pub fn not_found(code: ErrorCode, entity: &str, id: impl fmt::Display) -> Self {
        Self::new(code, format!("{} not found: {}", entity, id))
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        DomainError::new(err.code(), err.to_string()).with_detail("field", field)
    }
}
