use super::*;
use crate::domain::foundation::{DomainError, OptionId, QuestionId};
use crate::domain::questionnaire::ChoiceOption;
use async_trait::async_trait;
use proptest::prelude::*;

struct FixedCatalog(Vec<QuestionnaireTemplate>);

#[async_trait]
impl TemplateCatalog for FixedCatalog {
    async fn find_by_id(
        &self,
        id: &TemplateId,
    ) -> Result<Option<QuestionnaireTemplate>, DomainError> {
        Ok(self.0.iter().find(|t| t.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<QuestionnaireTemplate>, DomainError> {
        Ok(self.0.clone())
    }

    async fn save(&self, _template: &QuestionnaireTemplate) -> Result<(), DomainError> {
        Ok(())
    }
}

fn qid(s: &str) -> QuestionId {
    QuestionId::new(s).unwrap()
}

fn oid(s: &str) -> OptionId {
    OptionId::new(s).unwrap()
}

fn options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(oid("a"), "A"),
        ChoiceOption::new(oid("b"), "B"),
        ChoiceOption::new(oid("other"), "Other").with_custom(),
    ]
}

fn text_q(id: &str) -> Question {
    Question::new(qid(id), "Prompt", QuestionKind::Text)
}

fn checkbox_q(id: &str) -> Question {
    Question::new(qid(id), "Pick", QuestionKind::Checkbox { options: options() })
}

fn radio_q(id: &str) -> Question {
    Question::new(qid(id), "Pick one", QuestionKind::Radio { options: options() })
}

fn answers(pairs: Vec<(&str, Answer)>) -> AnswerSet {
    let mut set = AnswerSet::new();
    for (id, answer) in pairs {
        set.insert(qid(id), answer);
    }
    set
}

// ════════════════════════════════════════════════════════════════════════════
// resolve_questions
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn resolve_questions_returns_template_order() {
    let template = QuestionnaireTemplate::new(
        TemplateId::new(),
        "Onboarding",
        vec![text_q("first"), text_q("second"), text_q("third")],
    )
    .unwrap();
    let id = template.id;
    let engine = TemplateEngine::new(Arc::new(FixedCatalog(vec![template])));

    let questions = engine.resolve_questions(&id).await.unwrap();
    let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn resolve_questions_fails_for_unknown_template() {
    let engine = TemplateEngine::new(Arc::new(FixedCatalog(vec![])));
    let missing = TemplateId::new();
    let err = engine.resolve_questions(&missing).await.unwrap_err();
    assert_eq!(err, QuestionnaireError::TemplateNotFound(missing));
}

// ════════════════════════════════════════════════════════════════════════════
// is_answered
// ════════════════════════════════════════════════════════════════════════════

#[test]
fn optional_questions_are_always_answered() {
    assert!(TemplateEngine::is_answered(&text_q("notes"), &AnswerSet::new()));
}

#[test]
fn required_checkbox_needs_a_selection() {
    let q = checkbox_q("goals").required();
    assert!(!TemplateEngine::is_answered(
        &q,
        &answers(vec![("goals", Answer::Choices(vec![]))])
    ));
    assert!(TemplateEngine::is_answered(
        &q,
        &answers(vec![("goals", Answer::choices([oid("a")]))])
    ));
}

#[test]
fn required_text_ignores_whitespace() {
    let q = text_q("name").required();
    assert!(!TemplateEngine::is_answered(
        &q,
        &answers(vec![("name", Answer::text("   "))])
    ));
    assert!(TemplateEngine::is_answered(
        &q,
        &answers(vec![("name", Answer::text("Ada"))])
    ));
}

#[test]
fn wrong_shape_counts_as_unanswered() {
    let q = radio_q("budget").required();
    assert!(!TemplateEngine::is_answered(
        &q,
        &answers(vec![("budget", Answer::text("a"))])
    ));
}

#[test]
fn custom_text_does_not_affect_answeredness() {
    let q = radio_q("budget").required();
    let set = answers(vec![("budget", Answer::choice(oid("other")))]);
    assert!(TemplateEngine::is_answered(&q, &set));
}

// ════════════════════════════════════════════════════════════════════════════
// progress / navigation
// ════════════════════════════════════════════════════════════════════════════

#[test]
fn progress_is_position_based() {
    let questions = vec![text_q("a"), text_q("b"), text_q("c")];
    assert_eq!(TemplateEngine::progress(&questions, 0).value(), 33);
    assert_eq!(TemplateEngine::progress(&questions, 1).value(), 66);
    assert_eq!(TemplateEngine::progress(&questions, 2).value(), 100);
}

#[test]
fn progress_degrades_to_zero() {
    assert_eq!(TemplateEngine::progress(&[], 0), Percentage::ZERO);
    assert_eq!(TemplateEngine::progress(&[text_q("a")], 5), Percentage::ZERO);
}

#[test]
fn can_advance_follows_answeredness_and_back_is_always_allowed() {
    let q = text_q("name").required();
    assert!(!TemplateEngine::can_advance(&q, &AnswerSet::new()));
    assert!(TemplateEngine::can_go_back(0));
    assert!(TemplateEngine::can_go_back(7));
}

// ════════════════════════════════════════════════════════════════════════════
// validate_submission / completion
// ════════════════════════════════════════════════════════════════════════════

#[test]
fn submission_reports_missing_required_in_order() {
    let questions = vec![
        text_q("q1").required(),
        text_q("q2"),
        checkbox_q("q3").required(),
        text_q("q4"),
    ];
    let set = answers(vec![("q2", Answer::text("filled"))]);
    let err = TemplateEngine::validate_submission(&questions, &set).unwrap_err();
    assert_eq!(
        err,
        QuestionnaireError::IncompleteRequired {
            missing: vec![qid("q1"), qid("q3")]
        }
    );
}

#[test]
fn answering_optionals_does_not_cover_a_skipped_required() {
    let questions = vec![
        text_q("q1").required(),
        text_q("q2"),
        checkbox_q("q3").required(),
        text_q("q4"),
    ];
    let set = answers(vec![
        ("q1", Answer::text("Ada")),
        ("q2", Answer::text("extra detail")),
        ("q4", Answer::text("more")),
    ]);
    let err = TemplateEngine::validate_submission(&questions, &set).unwrap_err();
    assert_eq!(
        err,
        QuestionnaireError::IncompleteRequired {
            missing: vec![qid("q3")]
        }
    );
    assert_eq!(TemplateEngine::completion(&questions, &set).value(), 75);
}

#[test]
fn submission_passes_when_required_are_answered() {
    let questions = vec![text_q("q1").required(), text_q("q2")];
    let set = answers(vec![("q1", Answer::text("yes"))]);
    assert!(TemplateEngine::validate_submission(&questions, &set).is_ok());
}

#[test]
fn completion_counts_content_not_position() {
    let questions = vec![text_q("a"), text_q("b"), text_q("c")];
    let set = answers(vec![("a", Answer::text("x")), ("c", Answer::text("y"))]);
    assert_eq!(TemplateEngine::completion(&questions, &set).value(), 67);
    assert_eq!(TemplateEngine::completion(&[], &set), Percentage::ZERO);
}

// ════════════════════════════════════════════════════════════════════════════
// validate_answer
// ════════════════════════════════════════════════════════════════════════════

#[test]
fn custom_text_is_kept_for_allow_custom_options() {
    let answer = Answer::Choice(ChoiceSelection::new(oid("other")).with_custom_text(" Podcast "));
    let validated = TemplateEngine::validate_answer(&radio_q("src"), answer).unwrap();
    assert_eq!(
        validated,
        Answer::Choice(ChoiceSelection::new(oid("other")).with_custom_text("Podcast"))
    );
}

#[test]
fn custom_text_on_plain_option_is_rejected() {
    let answer = Answer::Choice(ChoiceSelection::new(oid("a")).with_custom_text("nope"));
    let err = TemplateEngine::validate_answer(&radio_q("src"), answer).unwrap_err();
    assert!(matches!(err, QuestionnaireError::InvalidAnswer { .. }));
}

#[test]
fn blank_custom_text_is_dropped() {
    let answer = Answer::Choices(vec![ChoiceSelection::new(oid("a")).with_custom_text("  ")]);
    let validated = TemplateEngine::validate_answer(&checkbox_q("goals"), answer).unwrap();
    assert_eq!(validated, Answer::choices([oid("a")]));
}

#[test]
fn unknown_and_duplicate_options_are_rejected() {
    assert!(TemplateEngine::validate_answer(&radio_q("x"), Answer::choice(oid("zzz"))).is_err());
    assert!(TemplateEngine::validate_answer(
        &checkbox_q("x"),
        Answer::choices([oid("a"), oid("a")])
    )
    .is_err());
}

#[test]
fn shape_mismatch_is_rejected() {
    let err = TemplateEngine::validate_answer(&checkbox_q("x"), Answer::choice(oid("a")))
        .unwrap_err();
    assert!(err.message().contains("checkbox"));
}

#[test]
fn email_answers_are_checked_when_present() {
    let q = Question::new(qid("email"), "Email", QuestionKind::Email);
    assert!(TemplateEngine::validate_answer(&q, Answer::text("ada@example.com")).is_ok());
    assert!(TemplateEngine::validate_answer(&q, Answer::text("")).is_ok());
    assert!(TemplateEngine::validate_answer(&q, Answer::text("not-an-email")).is_err());
    assert!(TemplateEngine::validate_answer(&q, Answer::text("a@b@c")).is_err());
}

proptest! {
    #[test]
    fn progress_is_monotonic_and_ends_at_hundred(len in 1usize..200) {
        let questions: Vec<Question> = (0..len).map(|i| text_q(&format!("q{}", i))).collect();
        let mut previous = 0u8;
        for i in 0..len {
            let value = TemplateEngine::progress(&questions, i).value();
            prop_assert!(value >= previous);
            previous = value;
        }
        prop_assert_eq!(previous, 100);
    }
}
