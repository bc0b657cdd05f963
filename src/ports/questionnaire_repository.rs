//! Questionnaire instance repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError, QuestionnaireId};
use crate::domain::questionnaire::Questionnaire;

/// Repository port for questionnaire instances.
#[async_trait]
pub trait QuestionnaireRepository: Send + Sync {
    /// Insert or replace an instance.
    async fn save(&self, questionnaire: &Questionnaire) -> Result<(), DomainError>;

    /// Find an instance by its ID.
    async fn find_by_id(&self, id: &QuestionnaireId)
        -> Result<Option<Questionnaire>, DomainError>;

    /// Instances sent to a client, oldest first.
    async fn list_by_client(&self, client_id: &ClientId)
        -> Result<Vec<Questionnaire>, DomainError>;

    /// Delete every instance of a client, returning the removed ids.
    async fn delete_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<QuestionnaireId>, DomainError>;
}
