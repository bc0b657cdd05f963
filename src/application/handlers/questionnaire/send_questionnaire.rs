//! SendQuestionnaireHandler - Command handler for issuing a questionnaire.

use std::sync::Arc;

use crate::domain::foundation::{ClientId, QuestionnaireId, TemplateId, Timestamp};
use crate::domain::questionnaire::{Questionnaire, QuestionnaireError, TemplateEngine};
use crate::ports::{ClientRepository, QuestionnaireRepository, TemplateCatalog};

/// Command to send a questionnaire to a client.
#[derive(Debug, Clone)]
pub struct SendQuestionnaireCommand {
    pub client_id: ClientId,
    pub template_id: TemplateId,
    /// Falls back to the configured default.
    pub expires_in_days: Option<u32>,
}

/// Handler for issuing questionnaire instances.
pub struct SendQuestionnaireHandler {
    clients: Arc<dyn ClientRepository>,
    questionnaires: Arc<dyn QuestionnaireRepository>,
    templates: TemplateEngine,
    default_expires_in_days: u32,
}

impl SendQuestionnaireHandler {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        questionnaires: Arc<dyn QuestionnaireRepository>,
        catalog: Arc<dyn TemplateCatalog>,
        default_expires_in_days: u32,
    ) -> Self {
        Self {
            clients,
            questionnaires,
            templates: TemplateEngine::new(catalog),
            default_expires_in_days,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendQuestionnaireCommand,
    ) -> Result<Questionnaire, QuestionnaireError> {
        if self.clients.find_by_id(&cmd.client_id).await?.is_none() {
            return Err(QuestionnaireError::ClientNotFound(cmd.client_id));
        }
        let template = self.templates.resolve_template(&cmd.template_id).await?;

        let questionnaire = Questionnaire::issue(
            QuestionnaireId::new(),
            cmd.client_id,
            template.id,
            cmd.expires_in_days.unwrap_or(self.default_expires_in_days),
            Timestamp::now(),
        )?;
        self.questionnaires.save(&questionnaire).await?;

        tracing::info!(
            questionnaire_id = %questionnaire.id,
            client_id = %questionnaire.client_id,
            template = %template.name,
            "Questionnaire sent"
        );

        Ok(questionnaire)
    }
}
