//! In-memory template catalog with YAML seeding.
//!
//! Seed file shape:
//!
//! ```yaml
//! templates:
//!   - name: Website onboarding
//!     description: Sent after a proposal is accepted
//!     questions:
//!       - id: company_name
//!         prompt: What is your company called?
//!         type: text
//!         required: true
//!       - id: goals
//!         prompt: What should the site achieve?
//!         type: checkbox
//!         options:
//!           - { id: leads, label: Generate leads }
//!           - { id: other, label: Other, allow_custom: true }
//! ```
//!
//! `id` on a template is optional; a fresh one is assigned when absent.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, TemplateId, ValidationError};
use crate::domain::questionnaire::{Question, QuestionnaireTemplate};
use crate::ports::TemplateCatalog;

/// Errors while loading a template seed file.
#[derive(Debug, Error)]
pub enum TemplateSeedError {
    #[error("failed to read template seed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template seed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("template '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    templates: Vec<SeedTemplate>,
}

#[derive(Debug, Deserialize)]
struct SeedTemplate {
    #[serde(default)]
    id: Option<TemplateId>,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    questions: Vec<Question>,
}

impl SeedTemplate {
    fn into_template(self) -> Result<QuestionnaireTemplate, TemplateSeedError> {
        let template = QuestionnaireTemplate {
            id: self.id.unwrap_or_default(),
            name: self.name,
            description: self.description,
            questions: self.questions,
        };
        template
            .validate()
            .map_err(|source| TemplateSeedError::Invalid {
                name: template.name.clone(),
                source,
            })?;
        Ok(template)
    }
}

/// Parses seed YAML into validated templates.
pub fn parse_template_seed(yaml: &str) -> Result<Vec<QuestionnaireTemplate>, TemplateSeedError> {
    let file: SeedFile = serde_yaml::from_str(yaml)?;
    file.templates
        .into_iter()
        .map(SeedTemplate::into_template)
        .collect()
}

/// Template catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateCatalog {
    templates: Arc<RwLock<HashMap<TemplateId, QuestionnaireTemplate>>>,
}

impl InMemoryTemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: impl IntoIterator<Item = QuestionnaireTemplate>) -> Self {
        let map = templates.into_iter().map(|t| (t.id, t)).collect();
        Self {
            templates: Arc::new(RwLock::new(map)),
        }
    }

    /// Loads templates from a YAML seed file.
    pub async fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, TemplateSeedError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|source| TemplateSeedError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let templates = parse_template_seed(&yaml)?;
        tracing::info!(
            path = %path.display(),
            count = templates.len(),
            "Loaded questionnaire templates"
        );
        Ok(Self::with_templates(templates))
    }
}

#[async_trait]
impl TemplateCatalog for InMemoryTemplateCatalog {
    async fn find_by_id(
        &self,
        id: &TemplateId,
    ) -> Result<Option<QuestionnaireTemplate>, DomainError> {
        Ok(self.templates.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<QuestionnaireTemplate>, DomainError> {
        let mut templates: Vec<QuestionnaireTemplate> =
            self.templates.read().await.values().cloned().collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    async fn save(&self, template: &QuestionnaireTemplate) -> Result<(), DomainError> {
        template.validate()?;
        self.templates
            .write()
            .await
            .insert(template.id, template.clone());
        Ok(())
    }
}
