//! Questionnaire instance sent to a client.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ClientId, QuestionId, QuestionnaireId, StateMachine, TemplateId, Timestamp,
    MAX_VALIDITY_DAYS,
};

use super::{Answer, AnswerSet, QuestionnaireError, QuestionnaireTemplate, TemplateEngine};

/// Status of a questionnaire instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStatus {
    Sent,
    InProgress,
    Completed,
    Expired,
}

impl QuestionnaireStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionnaireStatus::Sent => "sent",
            QuestionnaireStatus::InProgress => "in_progress",
            QuestionnaireStatus::Completed => "completed",
            QuestionnaireStatus::Expired => "expired",
        }
    }

    /// Whether the client may still record answers.
    pub fn accepts_answers(&self) -> bool {
        matches!(
            self,
            QuestionnaireStatus::Sent | QuestionnaireStatus::InProgress
        )
    }
}

impl std::fmt::Display for QuestionnaireStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StateMachine for QuestionnaireStatus {
    fn successors(&self) -> &'static [Self] {
        use QuestionnaireStatus::*;
        match self {
            Sent => &[InProgress, Completed, Expired],
            InProgress => &[Completed, Expired],
            Completed | Expired => &[],
        }
    }
}

/// Client-specific instance of a template.
///
/// # Invariants
///
/// - every answer was validated against the template question it keys
/// - `completed_at` is set iff `status == Completed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub id: QuestionnaireId,
    pub client_id: ClientId,
    pub template_id: TemplateId,
    pub answers: AnswerSet,
    pub status: QuestionnaireStatus,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub updated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl Questionnaire {
    /// Issues a new instance in `Sent` status.
    pub fn issue(
        id: QuestionnaireId,
        client_id: ClientId,
        template_id: TemplateId,
        expires_in_days: u32,
        now: Timestamp,
    ) -> Result<Self, QuestionnaireError> {
        if !(1..=MAX_VALIDITY_DAYS).contains(&expires_in_days) {
            return Err(QuestionnaireError::validation(
                "expires_in_days",
                format!(
                    "Questionnaire must stay open between 1 and {} days",
                    MAX_VALIDITY_DAYS
                ),
            ));
        }
        Ok(Self {
            id,
            client_id,
            template_id,
            answers: AnswerSet::new(),
            status: QuestionnaireStatus::Sent,
            created_at: now,
            expires_at: now.add_days(i64::from(expires_in_days)),
            updated_at: now,
            completed_at: None,
        })
    }

    /// True if still open but past `expires_at`.
    pub fn is_lapsed(&self, now: Timestamp) -> bool {
        self.status.accepts_answers() && now.is_after(&self.expires_at)
    }

    /// Status as observed at `now`, applying lazy expiry.
    pub fn effective_status(&self, now: Timestamp) -> QuestionnaireStatus {
        if self.is_lapsed(now) {
            QuestionnaireStatus::Expired
        } else {
            self.status
        }
    }

    /// Records (or replaces) one answer.
    ///
    /// The first recorded answer moves the instance to `InProgress`.
    ///
    /// # Errors
    ///
    /// - `Expired` / `AlreadyCompleted` when the instance is closed
    /// - `UnknownQuestion` when the id is not in the template
    /// - `InvalidAnswer` when the answer does not fit the question
    pub fn record_answer(
        &mut self,
        template: &QuestionnaireTemplate,
        question_id: &QuestionId,
        answer: Answer,
        now: Timestamp,
    ) -> Result<(), QuestionnaireError> {
        self.ensure_open(template, now)?;

        let question = template
            .question(question_id)
            .ok_or_else(|| QuestionnaireError::UnknownQuestion(question_id.clone()))?;
        let answer = TemplateEngine::validate_answer(question, answer)?;

        self.answers.insert(question_id.clone(), answer);
        if self.status == QuestionnaireStatus::Sent {
            self.transition(QuestionnaireStatus::InProgress)?;
        }
        self.updated_at = now;
        Ok(())
    }

    /// Final submission.
    ///
    /// # Errors
    ///
    /// `IncompleteRequired` when required questions are unanswered, plus the
    /// closed-instance errors of `record_answer`.
    pub fn submit(
        &mut self,
        template: &QuestionnaireTemplate,
        now: Timestamp,
    ) -> Result<(), QuestionnaireError> {
        self.ensure_open(template, now)?;
        TemplateEngine::validate_submission(&template.questions, &self.answers)?;

        self.transition(QuestionnaireStatus::Completed)?;
        self.completed_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Persists lazy expiry. Returns true if the status changed.
    pub fn expire_if_lapsed(&mut self, now: Timestamp) -> bool {
        if !self.is_lapsed(now) {
            return false;
        }
        self.status = QuestionnaireStatus::Expired;
        self.updated_at = now;
        true
    }

    fn ensure_open(
        &self,
        template: &QuestionnaireTemplate,
        now: Timestamp,
    ) -> Result<(), QuestionnaireError> {
        if template.id != self.template_id {
            return Err(QuestionnaireError::TemplateNotFound(self.template_id));
        }
        match self.effective_status(now) {
            QuestionnaireStatus::Completed => Err(QuestionnaireError::AlreadyCompleted(self.id)),
            QuestionnaireStatus::Expired => Err(QuestionnaireError::Expired(self.id)),
            QuestionnaireStatus::Sent | QuestionnaireStatus::InProgress => Ok(()),
        }
    }

    fn transition(&mut self, target: QuestionnaireStatus) -> Result<(), QuestionnaireError> {
        self.status = self.status.transition_to(target).map_err(|e| {
            QuestionnaireError::validation("status", e.to_string())
        })?;
        Ok(())
    }
}
