//! Questionnaire template catalog port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TemplateId};
use crate::domain::questionnaire::QuestionnaireTemplate;

/// Read-mostly store of admin-authored templates.
#[async_trait]
pub trait TemplateCatalog: Send + Sync {
    /// Find a template by its ID.
    async fn find_by_id(&self, id: &TemplateId)
        -> Result<Option<QuestionnaireTemplate>, DomainError>;

    /// All templates, ordered by name.
    async fn list(&self) -> Result<Vec<QuestionnaireTemplate>, DomainError>;

    /// Insert or replace a template.
    async fn save(&self, template: &QuestionnaireTemplate) -> Result<(), DomainError>;
}
