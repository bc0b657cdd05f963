//! Request bodies for questionnaire endpoints.
//!
//! Responses reuse the domain's serialized shapes (`Questionnaire` and
//! `QuestionnaireProgress`).

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::AnswerInput;
use crate::domain::foundation::QuestionId;
use crate::domain::questionnaire::Answer;

#[derive(Debug, Clone, Deserialize)]
pub struct SendQuestionnaireRequest {
    pub client_id: String,
    pub template_id: String,
    #[serde(default)]
    pub expires_in_days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerEntry {
    pub question_id: QuestionId,
    pub answer: Answer,
}

/// Body for `PUT /api/questionnaires/:id/answers`.
///
/// Carries either typed `answers` or a flat `legacy` map, never both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordAnswersRequest {
    #[serde(default)]
    pub answers: Option<Vec<AnswerEntry>>,
    #[serde(default)]
    pub legacy: Option<Map<String, Value>>,
}

impl RecordAnswersRequest {
    pub fn into_input(self) -> Result<AnswerInput, ApiError> {
        match (self.answers, self.legacy) {
            (Some(entries), None) => Ok(AnswerInput::Typed(
                entries
                    .into_iter()
                    .map(|e| (e.question_id, e.answer))
                    .collect(),
            )),
            (None, Some(map)) => Ok(AnswerInput::Legacy(map)),
            (Some(_), Some(_)) => Err(ApiError::bad_request(
                "Provide either answers or legacy, not both",
            )),
            (None, None) => Err(ApiError::bad_request("No answers provided")),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressParams {
    /// Zero-based position of the question on screen.
    #[serde(default)]
    pub index: usize,
}
