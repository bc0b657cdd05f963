//! Proposal status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle of a proposal sent to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    /// Awaiting the client's answer.
    Pending,
    Accepted,
    Rejected,
    /// Lapsed past `expires_at` without an answer.
    Expired,
}

impl ProposalStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, ProposalStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "pending",
            ProposalStatus::Accepted => "accepted",
            ProposalStatus::Rejected => "rejected",
            ProposalStatus::Expired => "expired",
        }
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StateMachine for ProposalStatus {
    fn successors(&self) -> &'static [Self] {
        use ProposalStatus::*;
        match self {
            Pending => &[Accepted, Rejected, Expired],
            Accepted | Rejected | Expired => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_answered_or_lapse() {
        for target in [
            ProposalStatus::Accepted,
            ProposalStatus::Rejected,
            ProposalStatus::Expired,
        ] {
            assert!(ProposalStatus::Pending.can_transition_to(&target));
        }
    }

    #[test]
    fn answered_proposals_are_terminal() {
        assert!(ProposalStatus::Accepted.is_terminal());
        assert!(ProposalStatus::Rejected.is_terminal());
        assert!(ProposalStatus::Expired.is_terminal());
        assert!(ProposalStatus::Accepted
            .transition_to(ProposalStatus::Rejected)
            .is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProposalStatus::Accepted).unwrap(),
            "\"accepted\""
        );
    }
}
