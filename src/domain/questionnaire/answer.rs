//! Answer values and the per-instance answer set.
//!
//! Answers are a closed sum type matching the question kind. Custom "Other"
//! text rides on the selected option instead of living in sidecar keys.
//!
//! # Legacy answer maps
//!
//! Older intake forms submit a flat JSON object:
//!
//! ```text
//! { "budget": "other", "budget_custom": "Around 5k",
//!   "goals": ["seo", "other"], "goals_other_custom": "Podcast" }
//! ```
//!
//! `AnswerSet::from_legacy_map` folds the `{question}_custom` and
//! `{question}_{option}_custom` sidecars into `ChoiceSelection::custom_text`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{OptionId, QuestionId};

use super::{Question, QuestionKind, QuestionnaireError};

/// A picked option plus optional free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSelection {
    pub option_id: OptionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
}

impl ChoiceSelection {
    pub fn new(option_id: OptionId) -> Self {
        Self {
            option_id,
            custom_text: None,
        }
    }

    pub fn with_custom_text(mut self, text: impl Into<String>) -> Self {
        self.custom_text = Some(text.into());
        self
    }
}

/// Answer to a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Text, email and textarea questions.
    Text(String),
    /// Radio and select questions.
    Choice(ChoiceSelection),
    /// Checkbox questions.
    Choices(Vec<ChoiceSelection>),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }

    pub fn choice(option_id: OptionId) -> Self {
        Answer::Choice(ChoiceSelection::new(option_id))
    }

    pub fn choices(option_ids: impl IntoIterator<Item = OptionId>) -> Self {
        Answer::Choices(option_ids.into_iter().map(ChoiceSelection::new).collect())
    }

    /// Name of the answer shape, for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Answer::Text(_) => "text",
            Answer::Choice(_) => "choice",
            Answer::Choices(_) => "choices",
        }
    }
}

/// Answers keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, Answer>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Answer> {
        self.0.get(id)
    }

    /// Inserts or replaces the answer for `id`.
    pub fn insert(&mut self, id: QuestionId, answer: Answer) -> Option<Answer> {
        self.0.insert(id, answer)
    }

    pub fn remove(&mut self, id: &QuestionId) -> Option<Answer> {
        self.0.remove(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.0.iter()
    }

    /// Converts a flat legacy answer map into typed answers.
    ///
    /// Keys that match no question are ignored, as are sidecar keys for
    /// options that do not allow custom text. Blank values are skipped.
    ///
    /// # Errors
    ///
    /// `InvalidAnswer` when a value has the wrong JSON type for its question.
    pub fn from_legacy_map(
        questions: &[Question],
        map: &Map<String, Value>,
    ) -> Result<Self, QuestionnaireError> {
        let mut answers = AnswerSet::new();

        for question in questions {
            let Some(value) = map.get(question.id.as_str()) else {
                continue;
            };
            let answer = match &question.kind {
                QuestionKind::Text | QuestionKind::Email | QuestionKind::Textarea => {
                    legacy_string(question, value)?.map(Answer::Text)
                }
                QuestionKind::Radio { .. } | QuestionKind::Select { .. } => {
                    match legacy_string(question, value)? {
                        Some(raw) => {
                            let option_id = legacy_option(question, raw)?;
                            let sidecar = format!("{}_custom", question.id);
                            Some(Answer::Choice(legacy_selection(
                                question, option_id, map, &sidecar,
                            )))
                        }
                        None => None,
                    }
                }
                QuestionKind::Checkbox { .. } => {
                    let Value::Array(items) = value else {
                        return Err(QuestionnaireError::invalid_answer(
                            &question.id,
                            "expected a list of option ids",
                        ));
                    };
                    let mut selections = Vec::with_capacity(items.len());
                    for item in items {
                        let Some(raw) = legacy_string(question, item)? else {
                            continue;
                        };
                        let option_id = legacy_option(question, raw)?;
                        let sidecar = format!("{}_{}_custom", question.id, option_id);
                        selections.push(legacy_selection(question, option_id, map, &sidecar));
                    }
                    Some(Answer::Choices(selections))
                }
            };

            if let Some(answer) = answer {
                answers.insert(question.id.clone(), answer);
            }
        }

        Ok(answers)
    }
}

fn legacy_string(question: &Question, value: &Value) -> Result<Option<String>, QuestionnaireError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(QuestionnaireError::invalid_answer(
            &question.id,
            "expected a string",
        )),
    }
}

fn legacy_option(question: &Question, raw: String) -> Result<OptionId, QuestionnaireError> {
    OptionId::new(raw).map_err(|e| QuestionnaireError::invalid_answer(&question.id, e.to_string()))
}

fn legacy_selection(
    question: &Question,
    option_id: OptionId,
    map: &Map<String, Value>,
    sidecar: &str,
) -> ChoiceSelection {
    let allows_custom = question
        .option(&option_id)
        .map(|o| o.allow_custom)
        .unwrap_or(false);
    let custom_text = if allows_custom {
        map.get(sidecar)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    } else {
        None
    };
    ChoiceSelection {
        option_id,
        custom_text,
    }
}
