//! Questionnaire domain module.
//!
//! Templates are admin-authored question lists; instances are the
//! client-specific copies that collect answers.
//!
//! # Module Structure
//!
//! - `question` - Question, QuestionKind, ChoiceOption
//! - `answer` - Answer, ChoiceSelection, AnswerSet (incl. legacy maps)
//! - `template` - QuestionnaireTemplate
//! - `engine` - TemplateEngine
//! - `instance` - Questionnaire and QuestionnaireStatus
//! - `errors` - QuestionnaireError

mod answer;
mod engine;
mod errors;
mod instance;
mod question;
mod template;

pub use answer::{Answer, AnswerSet, ChoiceSelection};
pub use engine::TemplateEngine;
pub use errors::QuestionnaireError;
pub use instance::{Questionnaire, QuestionnaireStatus};
pub use question::{ChoiceOption, Question, QuestionKind};
pub use template::QuestionnaireTemplate;
