//! GetQuestionnaireProgressHandler - Query handler for the step-by-step view.
//!
//! Everything here is advisory: an index past the end reports 0% progress
//! and no current question instead of failing.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{Percentage, QuestionId, QuestionnaireId, Timestamp};
use crate::domain::questionnaire::{
    Question, QuestionnaireError, QuestionnaireStatus, TemplateEngine,
};
use crate::ports::{QuestionnaireRepository, TemplateCatalog};

/// Query for progress at a position.
#[derive(Debug, Clone)]
pub struct GetQuestionnaireProgressQuery {
    pub questionnaire_id: QuestionnaireId,
    pub current_index: usize,
}

/// Navigation state for one position in a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireProgress {
    pub questionnaire_id: QuestionnaireId,
    pub status: QuestionnaireStatus,
    pub current_index: usize,
    pub total_questions: usize,
    pub current_question: Option<Question>,
    /// Position-based progress bar value.
    pub progress: Percentage,
    /// Share of questions that hold an answer.
    pub completion: Percentage,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub missing_required: Vec<QuestionId>,
}

/// Handler for progress queries.
pub struct GetQuestionnaireProgressHandler {
    questionnaires: Arc<dyn QuestionnaireRepository>,
    templates: TemplateEngine,
}

impl GetQuestionnaireProgressHandler {
    pub fn new(
        questionnaires: Arc<dyn QuestionnaireRepository>,
        catalog: Arc<dyn TemplateCatalog>,
    ) -> Self {
        Self {
            questionnaires,
            templates: TemplateEngine::new(catalog),
        }
    }

    pub async fn handle(
        &self,
        query: GetQuestionnaireProgressQuery,
    ) -> Result<QuestionnaireProgress, QuestionnaireError> {
        let questionnaire = self
            .questionnaires
            .find_by_id(&query.questionnaire_id)
            .await?
            .ok_or(QuestionnaireError::NotFound(query.questionnaire_id))?;
        let questions = self
            .templates
            .resolve_questions(&questionnaire.template_id)
            .await?;
        let answers = &questionnaire.answers;

        let current_question = questions.get(query.current_index).cloned();
        let can_advance = current_question
            .as_ref()
            .is_some_and(|q| TemplateEngine::can_advance(q, answers));
        let missing_required = match TemplateEngine::validate_submission(&questions, answers) {
            Ok(()) => Vec::new(),
            Err(err) => err.missing_questions().to_vec(),
        };

        tracing::debug!(
            questionnaire_id = %questionnaire.id,
            index = query.current_index,
            "Questionnaire progress read"
        );

        Ok(QuestionnaireProgress {
            questionnaire_id: questionnaire.id,
            status: questionnaire.effective_status(Timestamp::now()),
            current_index: query.current_index,
            total_questions: questions.len(),
            progress: TemplateEngine::progress(&questions, query.current_index),
            completion: TemplateEngine::completion(&questions, answers),
            can_advance,
            can_go_back: TemplateEngine::can_go_back(query.current_index),
            current_question,
            missing_required,
        })
    }
}
