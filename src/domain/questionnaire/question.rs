//! Question shapes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, QuestionId};

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: OptionId,
    pub label: String,
    /// Whether picking this option lets the client type their own text
    /// (the "Other: ____" pattern).
    #[serde(default)]
    pub allow_custom: bool,
}

impl ChoiceOption {
    pub fn new(id: OptionId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            allow_custom: false,
        }
    }

    pub fn with_custom(mut self) -> Self {
        self.allow_custom = true;
        self
    }
}

/// Closed set of question kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Email,
    Textarea,
    /// Exactly one option.
    Radio { options: Vec<ChoiceOption> },
    /// Any number of options.
    Checkbox { options: Vec<ChoiceOption> },
    /// Exactly one option, rendered as a dropdown.
    Select { options: Vec<ChoiceOption> },
}

impl QuestionKind {
    /// Options of a choice question; `None` for free-text kinds.
    pub fn options(&self) -> Option<&[ChoiceOption]> {
        match self {
            QuestionKind::Radio { options }
            | QuestionKind::Checkbox { options }
            | QuestionKind::Select { options } => Some(options),
            QuestionKind::Text | QuestionKind::Email | QuestionKind::Textarea => None,
        }
    }

    pub fn is_free_text(&self) -> bool {
        self.options().is_none()
    }

    pub fn is_multi_select(&self) -> bool {
        matches!(self, QuestionKind::Checkbox { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Email => "email",
            QuestionKind::Textarea => "textarea",
            QuestionKind::Radio { .. } => "radio",
            QuestionKind::Checkbox { .. } => "checkbox",
            QuestionKind::Select { .. } => "select",
        }
    }
}

/// A single question in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn new(id: QuestionId, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            help_text: None,
            required: false,
            kind,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help_text = Some(help.into());
        self
    }

    /// Looks up an option by id.
    pub fn option(&self, id: &OptionId) -> Option<&ChoiceOption> {
        self.kind.options()?.iter().find(|o| o.id == *id)
    }
}
