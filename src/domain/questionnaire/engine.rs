//! TemplateEngine - resolves templates and judges answers.
//!
//! Template lookup goes through the `TemplateCatalog` port; everything else
//! is a pure function of the question list and the answer set.
//!
//! # Answered-ness
//!
//! | Kind | Answered when |
//! |------|---------------|
//! | text, email, textarea | trimmed text is non-empty |
//! | radio, select | a non-blank option id is selected |
//! | checkbox | at least one option is selected |
//!
//! Optional questions always count as answered for navigation and
//! submission. An answer of the wrong shape counts as unanswered.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::foundation::{Percentage, TemplateId};
use crate::ports::TemplateCatalog;

use super::{
    Answer, AnswerSet, ChoiceSelection, Question, QuestionKind, QuestionnaireError,
    QuestionnaireTemplate,
};

/// Questionnaire template engine.
pub struct TemplateEngine {
    catalog: Arc<dyn TemplateCatalog>,
}

impl TemplateEngine {
    pub fn new(catalog: Arc<dyn TemplateCatalog>) -> Self {
        Self { catalog }
    }

    /// Loads a template by id.
    ///
    /// # Errors
    ///
    /// `TemplateNotFound` for an unknown id.
    pub async fn resolve_template(
        &self,
        template_id: &TemplateId,
    ) -> Result<QuestionnaireTemplate, QuestionnaireError> {
        self.catalog
            .find_by_id(template_id)
            .await?
            .ok_or(QuestionnaireError::TemplateNotFound(*template_id))
    }

    /// Ordered question list for a template.
    pub async fn resolve_questions(
        &self,
        template_id: &TemplateId,
    ) -> Result<Vec<Question>, QuestionnaireError> {
        Ok(self.resolve_template(template_id).await?.questions)
    }

    /// Whether `question` counts as answered in `answers`.
    pub fn is_answered(question: &Question, answers: &AnswerSet) -> bool {
        !question.required || Self::has_content(question, answers)
    }

    /// Whether `answers` holds a non-empty answer of the right shape.
    pub fn has_content(question: &Question, answers: &AnswerSet) -> bool {
        match (&question.kind, answers.get(&question.id)) {
            (
                QuestionKind::Text | QuestionKind::Email | QuestionKind::Textarea,
                Some(Answer::Text(text)),
            ) => !text.trim().is_empty(),
            (
                QuestionKind::Radio { .. } | QuestionKind::Select { .. },
                Some(Answer::Choice(selection)),
            ) => !selection.option_id.as_str().trim().is_empty(),
            (QuestionKind::Checkbox { .. }, Some(Answer::Choices(selections))) => {
                !selections.is_empty()
            }
            _ => false,
        }
    }

    /// Position-based progress: `floor((index + 1) * 100 / len)`.
    ///
    /// Empty lists and indexes past the end report 0%.
    pub fn progress(questions: &[Question], current_index: usize) -> Percentage {
        if current_index >= questions.len() {
            return Percentage::ZERO;
        }
        Percentage::floored_ratio(current_index + 1, questions.len())
    }

    /// Navigation gate: the current question must be answered.
    pub fn can_advance(question: &Question, answers: &AnswerSet) -> bool {
        Self::is_answered(question, answers)
    }

    /// Backward navigation is always allowed; index 0 stays at 0.
    pub fn can_go_back(_current_index: usize) -> bool {
        true
    }

    /// Final submission gate.
    ///
    /// # Errors
    ///
    /// `IncompleteRequired` listing every unanswered required question in
    /// template order.
    pub fn validate_submission(
        questions: &[Question],
        answers: &AnswerSet,
    ) -> Result<(), QuestionnaireError> {
        let missing: Vec<_> = questions
            .iter()
            .filter(|q| !Self::is_answered(q, answers))
            .map(|q| q.id.clone())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(QuestionnaireError::IncompleteRequired { missing })
        }
    }

    /// Share of questions that hold content, rounded to nearest.
    pub fn completion(questions: &[Question], answers: &AnswerSet) -> Percentage {
        let answered = questions
            .iter()
            .filter(|q| Self::has_content(q, answers))
            .count();
        Percentage::rounded_ratio(answered, questions.len())
    }

    /// Checks an answer against its question and normalizes it.
    ///
    /// Text is kept verbatim; blank custom text is dropped.
    ///
    /// # Errors
    ///
    /// `InvalidAnswer` when the shape does not match the kind, an option id
    /// is unknown or repeated, custom text is given for an option that does
    /// not allow it, or an email is malformed.
    pub fn validate_answer(
        question: &Question,
        answer: Answer,
    ) -> Result<Answer, QuestionnaireError> {
        match (&question.kind, answer) {
            (QuestionKind::Email, Answer::Text(text)) => {
                if !text.trim().is_empty() && !looks_like_email(text.trim()) {
                    return Err(QuestionnaireError::invalid_answer(
                        &question.id,
                        "not a valid email address",
                    ));
                }
                Ok(Answer::Text(text))
            }
            (QuestionKind::Text | QuestionKind::Textarea, Answer::Text(text)) => {
                Ok(Answer::Text(text))
            }
            (QuestionKind::Radio { .. } | QuestionKind::Select { .. }, Answer::Choice(sel)) => {
                Ok(Answer::Choice(Self::validate_selection(question, sel)?))
            }
            (QuestionKind::Checkbox { .. }, Answer::Choices(selections)) => {
                let mut seen = HashSet::new();
                let mut validated = Vec::with_capacity(selections.len());
                for sel in selections {
                    if !seen.insert(sel.option_id.clone()) {
                        return Err(QuestionnaireError::invalid_answer(
                            &question.id,
                            format!("option '{}' selected twice", sel.option_id),
                        ));
                    }
                    validated.push(Self::validate_selection(question, sel)?);
                }
                Ok(Answer::Choices(validated))
            }
            (kind, answer) => Err(QuestionnaireError::invalid_answer(
                &question.id,
                format!(
                    "a {} question cannot take a {} answer",
                    kind.as_str(),
                    answer.shape()
                ),
            )),
        }
    }

    fn validate_selection(
        question: &Question,
        selection: ChoiceSelection,
    ) -> Result<ChoiceSelection, QuestionnaireError> {
        let option = question.option(&selection.option_id).ok_or_else(|| {
            QuestionnaireError::invalid_answer(
                &question.id,
                format!("unknown option '{}'", selection.option_id),
            )
        })?;

        let custom_text = selection
            .custom_text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        if custom_text.is_some() && !option.allow_custom {
            return Err(QuestionnaireError::invalid_answer(
                &question.id,
                format!("option '{}' does not accept custom text", option.id),
            ));
        }

        Ok(ChoiceSelection {
            option_id: selection.option_id,
            custom_text,
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(' ')
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
