//! SubmitQuestionnaireHandler - Command handler for final submission.

use std::sync::Arc;

use crate::application::handlers::activity::touch_client;
use crate::domain::foundation::{QuestionnaireId, Timestamp};
use crate::domain::questionnaire::{Questionnaire, QuestionnaireError, TemplateEngine};
use crate::ports::{ClientRepository, QuestionnaireRepository, TemplateCatalog};

/// Command to submit a questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireCommand {
    pub questionnaire_id: QuestionnaireId,
}

/// Handler for questionnaire submission.
pub struct SubmitQuestionnaireHandler {
    clients: Arc<dyn ClientRepository>,
    questionnaires: Arc<dyn QuestionnaireRepository>,
    templates: TemplateEngine,
}

impl SubmitQuestionnaireHandler {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        questionnaires: Arc<dyn QuestionnaireRepository>,
        catalog: Arc<dyn TemplateCatalog>,
    ) -> Self {
        Self {
            clients,
            questionnaires,
            templates: TemplateEngine::new(catalog),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitQuestionnaireCommand,
    ) -> Result<Questionnaire, QuestionnaireError> {
        let mut questionnaire = self
            .questionnaires
            .find_by_id(&cmd.questionnaire_id)
            .await?
            .ok_or(QuestionnaireError::NotFound(cmd.questionnaire_id))?;

        let now = Timestamp::now();
        if questionnaire.expire_if_lapsed(now) {
            self.questionnaires.save(&questionnaire).await?;
            return Err(QuestionnaireError::Expired(questionnaire.id));
        }

        let template = self
            .templates
            .resolve_template(&questionnaire.template_id)
            .await?;

        if let Err(err) = questionnaire.submit(&template, now) {
            tracing::debug!(
                questionnaire_id = %questionnaire.id,
                missing = err.missing_questions().len(),
                "Submission rejected"
            );
            return Err(err);
        }

        self.questionnaires.save(&questionnaire).await?;
        touch_client(self.clients.as_ref(), &questionnaire.client_id, now).await?;

        tracing::info!(
            questionnaire_id = %questionnaire.id,
            client_id = %questionnaire.client_id,
            "Questionnaire completed"
        );

        Ok(questionnaire)
    }
}
