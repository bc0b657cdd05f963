//! Reusable questionnaire templates.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, TemplateId, ValidationError};

use super::Question;

/// Admin-authored, ordered list of questions.
///
/// # Invariants
///
/// - `name` is non-empty
/// - question ids are unique within the template
/// - choice questions carry at least one option, with unique option ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireTemplate {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

impl QuestionnaireTemplate {
    pub fn new(
        id: TemplateId,
        name: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, ValidationError> {
        let template = Self {
            id,
            name: name.into(),
            description: None,
            questions,
        };
        template.validate()?;
        Ok(template)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks the template invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("template_name"));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(&question.id) {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("duplicate question id '{}'", question.id),
                ));
            }
            if question.prompt.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "questions.{}.prompt",
                    question.id
                )));
            }
            if let Some(options) = question.kind.options() {
                if options.is_empty() {
                    return Err(ValidationError::invalid_format(
                        "questions",
                        format!("question '{}' has no options", question.id),
                    ));
                }
                let mut option_ids = HashSet::new();
                for option in options {
                    if !option_ids.insert(&option.id) {
                        return Err(ValidationError::invalid_format(
                            "questions",
                            format!(
                                "question '{}' repeats option '{}'",
                                question.id, option.id
                            ),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == *id)
    }

    pub fn required_count(&self) -> usize {
        self.questions.iter().filter(|q| q.required).count()
    }
}
