//! LifecycleStatusEngine - derives an advisory client status.
//!
//! # Rule
//!
//! 1. accepted proposal and activity within `inactive_after_days` -> active
//! 2. otherwise a pending proposal -> prospect
//! 3. otherwise activity older than `churned_after_days` -> churned
//! 4. otherwise activity older than `inactive_after_days` -> inactive
//! 5. otherwise no suggestion
//!
//! The stored status always wins for display; the suggestion is a hint.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::proposal::{Proposal, ProposalStatus};

use super::{Client, ClientStatus};

/// Activity thresholds, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecyclePolicy {
    pub inactive_after_days: i64,
    pub churned_after_days: i64,
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            inactive_after_days: 90,
            churned_after_days: 180,
        }
    }
}

/// Raw inputs to the lifecycle rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleSignals {
    pub accepted_proposals: usize,
    pub pending_proposals: usize,
    pub last_activity: Option<Timestamp>,
}

impl LifecycleSignals {
    /// Collects signals for `client` from its proposals.
    ///
    /// Pending proposals are counted by effective status, so a lapsed offer
    /// does not keep a client in prospect.
    pub fn gather(client: &Client, proposals: &[Proposal], now: Timestamp) -> Self {
        let mut signals = LifecycleSignals {
            last_activity: client.last_activity,
            ..Default::default()
        };
        for proposal in proposals.iter().filter(|p| p.client_id == client.id) {
            match proposal.effective_status(now) {
                ProposalStatus::Accepted => signals.accepted_proposals += 1,
                ProposalStatus::Pending => signals.pending_proposals += 1,
                ProposalStatus::Rejected | ProposalStatus::Expired => {}
            }
        }
        signals
    }
}

/// Stored status next to the system suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAssessment {
    pub stored: ClientStatus,
    pub suggested: Option<ClientStatus>,
}

impl StatusAssessment {
    /// The status shown to operators.
    pub fn display_status(&self) -> ClientStatus {
        self.stored
    }

    /// Suggestion worth surfacing, i.e. one that differs from stored.
    pub fn hint(&self) -> Option<ClientStatus> {
        self.suggested.filter(|s| *s != self.stored)
    }
}

/// Pure lifecycle calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifecycleStatusEngine {
    policy: LifecyclePolicy,
}

impl LifecycleStatusEngine {
    pub fn new(policy: LifecyclePolicy) -> Self {
        Self { policy }
    }

    pub fn suggest(&self, signals: &LifecycleSignals, now: Timestamp) -> Option<ClientStatus> {
        let idle_days = signals.last_activity.map(|at| now.days_since(&at));
        let recently_active = idle_days.is_some_and(|d| d <= self.policy.inactive_after_days);

        if signals.accepted_proposals > 0 && recently_active {
            return Some(ClientStatus::Active);
        }
        if signals.pending_proposals > 0 {
            return Some(ClientStatus::Prospect);
        }
        match idle_days {
            Some(d) if d > self.policy.churned_after_days => Some(ClientStatus::Churned),
            Some(d) if d > self.policy.inactive_after_days => Some(ClientStatus::Inactive),
            _ => None,
        }
    }

    /// Assessment for `client`; the client is never modified.
    pub fn assess(
        &self,
        client: &Client,
        signals: &LifecycleSignals,
        now: Timestamp,
    ) -> StatusAssessment {
        StatusAssessment {
            stored: client.stored_status,
            suggested: self.suggest(signals, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::ContactDetails;
    use crate::domain::foundation::{ClientId, Money, ProposalId};
    use crate::domain::pricing::{PaymentTerms, PricingEngine};
    use crate::domain::proposal::ProposalDraft;

    fn now() -> Timestamp {
        Timestamp::from_unix_secs(1_705_276_800).unwrap()
    }

    fn engine() -> LifecycleStatusEngine {
        LifecycleStatusEngine::default()
    }

    fn signals(accepted: usize, pending: usize, idle_days: Option<i64>) -> LifecycleSignals {
        LifecycleSignals {
            accepted_proposals: accepted,
            pending_proposals: pending,
            last_activity: idle_days.map(|d| now().minus_days(d)),
        }
    }

    fn client() -> Client {
        Client::register(
            ClientId::new(),
            ContactDetails {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                company: None,
                phone: None,
            },
            now(),
        )
        .unwrap()
    }

    fn proposal_for(client: &Client, created: Timestamp) -> Proposal {
        Proposal::create(
            ProposalId::new(),
            ProposalDraft {
                client_id: client.id,
                title: "Retainer".to_string(),
                selected_services: vec![],
                custom_services: vec![],
                terms: PaymentTerms::full(Money::from_cents(10_000)),
                expires_in_days: 30,
            },
            &PricingEngine::default(),
            created,
        )
        .unwrap()
    }

    #[test]
    fn accepted_and_recent_is_active() {
        assert_eq!(
            engine().suggest(&signals(1, 0, Some(10)), now()),
            Some(ClientStatus::Active)
        );
    }

    #[test]
    fn pending_without_acceptance_is_prospect() {
        assert_eq!(
            engine().suggest(&signals(0, 2, None), now()),
            Some(ClientStatus::Prospect)
        );
    }

    #[test]
    fn stale_activity_is_inactive_then_churned() {
        assert_eq!(
            engine().suggest(&signals(0, 0, Some(120)), now()),
            Some(ClientStatus::Inactive)
        );
        assert_eq!(
            engine().suggest(&signals(0, 0, Some(200)), now()),
            Some(ClientStatus::Churned)
        );
    }

    #[test]
    fn accepted_but_stale_falls_through_to_activity_rule() {
        assert_eq!(
            engine().suggest(&signals(3, 0, Some(181)), now()),
            Some(ClientStatus::Churned)
        );
    }

    #[test]
    fn thresholds_are_inclusive_of_the_boundary_day() {
        assert_eq!(
            engine().suggest(&signals(1, 0, Some(90)), now()),
            Some(ClientStatus::Active)
        );
        assert_eq!(engine().suggest(&signals(0, 0, Some(90)), now()), None);
    }

    #[test]
    fn no_signals_means_no_suggestion() {
        assert_eq!(engine().suggest(&LifecycleSignals::default(), now()), None);
    }

    #[test]
    fn custom_policy_moves_thresholds() {
        let engine = LifecycleStatusEngine::new(LifecyclePolicy {
            inactive_after_days: 30,
            churned_after_days: 60,
        });
        assert_eq!(
            engine.suggest(&signals(0, 0, Some(45)), now()),
            Some(ClientStatus::Inactive)
        );
    }

    #[test]
    fn assessment_keeps_stored_status_for_display() {
        let mut c = client();
        c.set_status(ClientStatus::Active, now());
        let assessment = engine().assess(&c, &signals(0, 1, None), now());
        assert_eq!(assessment.display_status(), ClientStatus::Active);
        assert_eq!(assessment.hint(), Some(ClientStatus::Prospect));
        assert_eq!(c.stored_status, ClientStatus::Active);
    }

    #[test]
    fn hint_is_hidden_when_suggestion_matches() {
        let c = client();
        let assessment = engine().assess(&c, &signals(0, 1, None), now());
        assert_eq!(assessment.suggested, Some(ClientStatus::Prospect));
        assert_eq!(assessment.hint(), None);
    }

    #[test]
    fn gather_counts_effective_statuses_for_the_client_only() {
        let c = client();
        let other = client();
        let mut accepted = proposal_for(&c, now().minus_days(5));
        accepted.accept(now().minus_days(4)).unwrap();
        let lapsed = proposal_for(&c, now().minus_days(60));
        let open = proposal_for(&c, now().minus_days(1));
        let foreign = proposal_for(&other, now());

        let signals = LifecycleSignals::gather(&c, &[accepted, lapsed, open, foreign], now());
        assert_eq!(signals.accepted_proposals, 1);
        assert_eq!(signals.pending_proposals, 1);
    }
}
