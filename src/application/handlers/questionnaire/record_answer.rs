//! RecordAnswerHandler - Command handler for saving questionnaire answers.
//!
//! Answers arrive either as typed `(question, answer)` pairs or as the flat
//! legacy map with `_custom` sidecar keys. A batch is applied all-or-nothing:
//! one invalid answer leaves the stored instance unchanged.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::application::handlers::activity::touch_client;
use crate::domain::foundation::{QuestionId, QuestionnaireId, Timestamp};
use crate::domain::questionnaire::{
    Answer, AnswerSet, Questionnaire, QuestionnaireError, TemplateEngine,
};
use crate::ports::{ClientRepository, QuestionnaireRepository, TemplateCatalog};

/// Answer payload.
#[derive(Debug, Clone)]
pub enum AnswerInput {
    Typed(Vec<(QuestionId, Answer)>),
    Legacy(Map<String, Value>),
}

/// Command to record answers on an open questionnaire.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub questionnaire_id: QuestionnaireId,
    pub answers: AnswerInput,
}

/// Handler for recording answers.
pub struct RecordAnswerHandler {
    clients: Arc<dyn ClientRepository>,
    questionnaires: Arc<dyn QuestionnaireRepository>,
    templates: TemplateEngine,
}

impl RecordAnswerHandler {
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
        cmd: RecordAnswerCommand,
    ) -> Result<Questionnaire, QuestionnaireError> {
        let mut questionnaire = self
            .questionnaires
            .find_by_id(&cmd.questionnaire_id)
            .await?
            .ok_or(QuestionnaireError::NotFound(cmd.questionnaire_id))?;

        let now = Timestamp::now();
        if questionnaire.expire_if_lapsed(now) {
            self.questionnaires.save(&questionnaire).await?;
            tracing::info!(questionnaire_id = %questionnaire.id, "Questionnaire expired");
            return Err(QuestionnaireError::Expired(questionnaire.id));
        }

        let template = self
            .templates
            .resolve_template(&questionnaire.template_id)
            .await?;

        let pairs: Vec<(QuestionId, Answer)> = match cmd.answers {
            AnswerInput::Typed(pairs) => pairs,
            AnswerInput::Legacy(map) => AnswerSet::from_legacy_map(&template.questions, &map)?
                .iter()
                .map(|(id, answer)| (id.clone(), answer.clone()))
                .collect(),
        };

        for (question_id, answer) in pairs {
            questionnaire.record_answer(&template, &question_id, answer, now)?;
        }

        self.questionnaires.save(&questionnaire).await?;
        touch_client(self.clients.as_ref(), &questionnaire.client_id, now).await?;

        tracing::info!(
            questionnaire_id = %questionnaire.id,
            answered = questionnaire.answers.len(),
            status = %questionnaire.status,
            "Answers recorded"
        );

        Ok(questionnaire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryClientRepository, InMemoryQuestionnaireRepository, InMemoryTemplateCatalog,
    };
    use crate::application::handlers::test_support::{intake_template, oid, qid, stored_client};
    use crate::domain::questionnaire::{ChoiceSelection, QuestionnaireStatus};
    use serde_json::json;

    struct Fixture {
        clients: Arc<InMemoryClientRepository>,
        questionnaires: Arc<InMemoryQuestionnaireRepository>,
        handler: RecordAnswerHandler,
        questionnaire: Questionnaire,
    }

    async fn fixture(issued_at: Timestamp) -> Fixture {
        let clients = Arc::new(InMemoryClientRepository::new());
        let questionnaires = Arc::new(InMemoryQuestionnaireRepository::new());
        let template = intake_template();
        let client = stored_client(&clients, "Ada").await;
        let questionnaire = Questionnaire::issue(
            QuestionnaireId::new(),
            client.id,
            template.id,
            14,
            issued_at,
        )
        .unwrap();
        questionnaires.save(&questionnaire).await.unwrap();
        let handler = RecordAnswerHandler::new(
            clients.clone(),
            questionnaires.clone(),
            Arc::new(InMemoryTemplateCatalog::with_templates([template])),
        );
        Fixture {
            clients,
            questionnaires,
            handler,
            questionnaire,
        }
    }

    #[tokio::test]
    async fn typed_answers_move_instance_in_progress() {
        let f = fixture(Timestamp::now()).await;

        let updated = f
            .handler
            .handle(RecordAnswerCommand {
                questionnaire_id: f.questionnaire.id,
                answers: AnswerInput::Typed(vec![(qid("company"), Answer::text("Acme"))]),
            })
            .await
            .unwrap();

        assert_eq!(updated.status, QuestionnaireStatus::InProgress);
        assert_eq!(updated.answers.get(&qid("company")), Some(&Answer::text("Acme")));
        let client = f
            .clients
            .find_by_id(&f.questionnaire.client_id)
            .await
            .unwrap()
            .unwrap();
        assert!(client.last_activity.is_some());
    }

    #[tokio::test]
    async fn legacy_map_folds_custom_sidecar() {
        let f = fixture(Timestamp::now()).await;
        let map = json!({
            "company": "Acme",
            "goals": ["leads", "other"],
            "goals_other_custom": "Hiring",
        });

        let updated = f
            .handler
            .handle(RecordAnswerCommand {
                questionnaire_id: f.questionnaire.id,
                answers: AnswerInput::Legacy(map.as_object().unwrap().clone()),
            })
            .await
            .unwrap();

        assert_eq!(
            updated.answers.get(&qid("goals")),
            Some(&Answer::Choices(vec![
                ChoiceSelection::new(oid("leads")),
                ChoiceSelection::new(oid("other")).with_custom_text("Hiring"),
            ]))
        );
    }

    #[tokio::test]
    async fn one_invalid_answer_keeps_stored_instance() {
        let f = fixture(Timestamp::now()).await;

        let err = f
            .handler
            .handle(RecordAnswerCommand {
                questionnaire_id: f.questionnaire.id,
                answers: AnswerInput::Typed(vec![
                    (qid("company"), Answer::text("Acme")),
                    (qid("contact_email"), Answer::text("not-an-email")),
                ]),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, QuestionnaireError::InvalidAnswer { .. }));
        let stored = f
            .questionnaires
            .find_by_id(&f.questionnaire.id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.answers.is_empty());
        assert_eq!(stored.status, QuestionnaireStatus::Sent);
    }

    #[tokio::test]
    async fn lapsed_instance_is_expired_and_persisted() {
        let f = fixture(Timestamp::now().minus_days(15)).await;

        let err = f
            .handler
            .handle(RecordAnswerCommand {
                questionnaire_id: f.questionnaire.id,
                answers: AnswerInput::Typed(vec![(qid("company"), Answer::text("Acme"))]),
            })
            .await
            .unwrap_err();

        assert_eq!(err, QuestionnaireError::Expired(f.questionnaire.id));
        let stored = f
            .questionnaires
            .find_by_id(&f.questionnaire.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, QuestionnaireStatus::Expired);
    }
}
