//! In-memory questionnaire repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{ClientId, DomainError, QuestionnaireId};
use crate::domain::questionnaire::Questionnaire;
use crate::ports::QuestionnaireRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionnaireRepository {
    questionnaires: Arc<RwLock<HashMap<QuestionnaireId, Questionnaire>>>,
}

impl InMemoryQuestionnaireRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.questionnaires.read().await.len()
    }
}

#[async_trait]
impl QuestionnaireRepository for InMemoryQuestionnaireRepository {
    async fn save(&self, questionnaire: &Questionnaire) -> Result<(), DomainError> {
        self.questionnaires
            .write()
            .await
            .insert(questionnaire.id, questionnaire.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &QuestionnaireId,
    ) -> Result<Option<Questionnaire>, DomainError> {
        Ok(self.questionnaires.read().await.get(id).cloned())
    }

    async fn list_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<Questionnaire>, DomainError> {
        let mut questionnaires: Vec<Questionnaire> = self
            .questionnaires
            .read()
            .await
            .values()
            .filter(|q| q.client_id == *client_id)
            .cloned()
            .collect();
        questionnaires.sort_by_key(|q| q.created_at);
        Ok(questionnaires)
    }

    async fn delete_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<QuestionnaireId>, DomainError> {
        let mut questionnaires = self.questionnaires.write().await;
        let ids: Vec<QuestionnaireId> = questionnaires
            .values()
            .filter(|q| q.client_id == *client_id)
            .map(|q| q.id)
            .collect();
        for id in &ids {
            questionnaires.remove(id);
        }
        Ok(ids)
    }
}
