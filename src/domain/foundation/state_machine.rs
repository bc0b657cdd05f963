//! Status lifecycles expressed as edge tables.

use super::ValidationError;

/// A status enum whose legal moves are listed per state.
///
/// Implementors only provide `successors`; membership checks, guarded moves
/// and terminal detection follow from it.
///
/// ```ignore
/// let next = QuestionnaireStatus::Sent.transition_to(QuestionnaireStatus::InProgress)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// States reachable in one step from `self`.
    fn successors(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.successors().contains(target)
    }

    /// Moves to `target` or reports the refused edge on the `status` field.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("{:?} -> {:?} is not allowed", self, target),
            ));
        }
        Ok(target)
    }

    fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }
}
