//! Fixtures shared by handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemoryClientRepository;
use crate::domain::client::{Client, ContactDetails};
use crate::domain::foundation::{ClientId, OptionId, QuestionId, TemplateId, Timestamp};
use crate::domain::questionnaire::{ChoiceOption, Question, QuestionKind, QuestionnaireTemplate};
use crate::ports::ClientRepository;

pub(crate) fn contact(name: &str) -> ContactDetails {
    ContactDetails {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        company: None,
        phone: None,
    }
}

/// Registers and stores a client.
pub(crate) async fn stored_client(clients: &Arc<InMemoryClientRepository>, name: &str) -> Client {
    let client = Client::register(ClientId::new(), contact(name), Timestamp::now()).unwrap();
    clients.save(&client).await.unwrap();
    client
}

pub(crate) fn qid(id: &str) -> QuestionId {
    QuestionId::new(id).unwrap()
}

pub(crate) fn oid(id: &str) -> OptionId {
    OptionId::new(id).unwrap()
}

/// Intake template: four questions, `company` and `goals` required.
pub(crate) fn intake_template() -> QuestionnaireTemplate {
    QuestionnaireTemplate::new(
        TemplateId::new(),
        "Client intake",
        vec![
            Question::new(qid("company"), "Company name", QuestionKind::Text).required(),
            Question::new(qid("contact_email"), "Best email", QuestionKind::Email),
            Question::new(
                qid("goals"),
                "What do you want to achieve?",
                QuestionKind::Checkbox {
                    options: vec![
                        ChoiceOption::new(oid("traffic"), "More traffic"),
                        ChoiceOption::new(oid("leads"), "More leads"),
                        ChoiceOption::new(oid("other"), "Other").with_custom(),
                    ],
                },
            )
            .required(),
            Question::new(qid("notes"), "Anything else?", QuestionKind::Textarea),
        ],
    )
    .unwrap()
}
