//! Questionnaire-specific error types.

use crate::domain::foundation::{
    ClientId, DomainError, ErrorCode, QuestionId, QuestionnaireId, TemplateId, ValidationError,
};

/// Questionnaire-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireError {
    /// Questionnaire instance was not found.
    NotFound(QuestionnaireId),

    /// Template id does not resolve.
    TemplateNotFound(TemplateId),

    /// Owning client does not exist.
    ClientNotFound(ClientId),

    /// Answer references a question not in the template.
    UnknownQuestion(QuestionId),

    /// Answer shape or content does not fit the question.
    InvalidAnswer { question_id: QuestionId, reason: String },

    /// Required questions left unanswered, in template order.
    IncompleteRequired { missing: Vec<QuestionId> },

    /// Instance passed its expiry date.
    Expired(QuestionnaireId),

    /// Instance was already submitted.
    AlreadyCompleted(QuestionnaireId),

    /// Field-level validation failure.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl QuestionnaireError {
    pub fn invalid_answer(question_id: &QuestionId, reason: impl Into<String>) -> Self {
        QuestionnaireError::InvalidAnswer {
            question_id: question_id.clone(),
            reason: reason.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        QuestionnaireError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        QuestionnaireError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionnaireError::NotFound(_) => ErrorCode::QuestionnaireNotFound,
            QuestionnaireError::TemplateNotFound(_) => ErrorCode::TemplateNotFound,
            QuestionnaireError::ClientNotFound(_) => ErrorCode::ClientNotFound,
            QuestionnaireError::UnknownQuestion(_) => ErrorCode::InvalidAnswer,
            QuestionnaireError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            QuestionnaireError::IncompleteRequired { .. } => ErrorCode::IncompleteRequired,
            QuestionnaireError::Expired(_) => ErrorCode::QuestionnaireExpired,
            QuestionnaireError::AlreadyCompleted(_) => ErrorCode::QuestionnaireCompleted,
            QuestionnaireError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            QuestionnaireError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            QuestionnaireError::NotFound(id) => format!("Questionnaire not found: {}", id),
            QuestionnaireError::TemplateNotFound(id) => format!("Template not found: {}", id),
            QuestionnaireError::ClientNotFound(id) => format!("Client not found: {}", id),
            QuestionnaireError::UnknownQuestion(id) => {
                format!("Question '{}' is not part of this questionnaire", id)
            }
            QuestionnaireError::InvalidAnswer {
                question_id,
                reason,
            } => format!("Invalid answer for '{}': {}", question_id, reason),
            QuestionnaireError::IncompleteRequired { missing } => {
                let ids: Vec<&str> = missing.iter().map(|q| q.as_str()).collect();
                format!("Required questions unanswered: {}", ids.join(", "))
            }
            QuestionnaireError::Expired(id) => format!("Questionnaire {} has expired", id),
            QuestionnaireError::AlreadyCompleted(id) => {
                format!("Questionnaire {} was already submitted", id)
            }
            QuestionnaireError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            QuestionnaireError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Ids of the missing required questions, if this is a submission failure.
    pub fn missing_questions(&self) -> &[QuestionId] {
        match self {
            QuestionnaireError::IncompleteRequired { missing } => missing,
            _ => &[],
        }
    }
}

impl std::fmt::Display for QuestionnaireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QuestionnaireError {}

impl From<ValidationError> for QuestionnaireError {
    fn from(err: ValidationError) -> Self {
        QuestionnaireError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for QuestionnaireError {
    fn from(err: DomainError) -> Self {
        QuestionnaireError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_required_lists_ids_in_order() {
        let err = QuestionnaireError::IncompleteRequired {
            missing: vec![
                QuestionId::new("name").unwrap(),
                QuestionId::new("budget").unwrap(),
            ],
        };
        assert_eq!(err.code(), ErrorCode::IncompleteRequired);
        assert_eq!(err.message(), "Required questions unanswered: name, budget");
        assert_eq!(err.missing_questions().len(), 2);
    }

    #[test]
    fn other_errors_have_no_missing_questions() {
        let err = QuestionnaireError::TemplateNotFound(TemplateId::new());
        assert!(err.missing_questions().is_empty());
        assert!(err.code().is_not_found());
    }
}
