//! Questionnaire command and query handlers.

mod get_progress;
mod record_answer;
mod send_questionnaire;
mod submit_questionnaire;

pub use get_progress::{
    GetQuestionnaireProgressHandler, GetQuestionnaireProgressQuery, QuestionnaireProgress,
};
pub use record_answer::{AnswerInput, RecordAnswerCommand, RecordAnswerHandler};
pub use send_questionnaire::{SendQuestionnaireCommand, SendQuestionnaireHandler};
pub use submit_questionnaire::{SubmitQuestionnaireCommand, SubmitQuestionnaireHandler};
