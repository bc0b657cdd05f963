//! RespondToProposalHandler - Command handler for a client's accept/reject.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::handlers::activity::touch_client;
use crate::domain::foundation::{ProposalId, Timestamp};
use crate::domain::proposal::{Proposal, ProposalError};
use crate::ports::{ClientRepository, ProposalRepository};

/// The client's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalDecision {
    Accept,
    Reject,
}

/// Command to answer a proposal.
#[derive(Debug, Clone)]
pub struct RespondToProposalCommand {
    pub proposal_id: ProposalId,
    pub decision: ProposalDecision,
}

/// Handler for proposal responses.
pub struct RespondToProposalHandler {
    clients: Arc<dyn ClientRepository>,
    proposals: Arc<dyn ProposalRepository>,
}

impl RespondToProposalHandler {
    pub fn new(clients: Arc<dyn ClientRepository>, proposals: Arc<dyn ProposalRepository>) -> Self {
        Self { clients, proposals }
    }

    pub async fn handle(&self, cmd: RespondToProposalCommand) -> Result<Proposal, ProposalError> {
        let mut proposal = self
            .proposals
            .find_by_id(&cmd.proposal_id)
            .await?
            .ok_or(ProposalError::NotFound(cmd.proposal_id))?;

        let now = Timestamp::now();

        // Record the lapse so later reads agree with the rejection below
        if proposal.expire_if_lapsed(now) {
            self.proposals.save(&proposal).await?;
            tracing::info!(proposal_id = %proposal.id, "Proposal expired before response");
            return Err(ProposalError::Expired(proposal.id));
        }

        match cmd.decision {
            ProposalDecision::Accept => proposal.accept(now)?,
            ProposalDecision::Reject => proposal.reject(now)?,
        }
        self.proposals.save(&proposal).await?;
        touch_client(self.clients.as_ref(), &proposal.client_id, now).await?;

        tracing::info!(
            proposal_id = %proposal.id,
            client_id = %proposal.client_id,
            status = %proposal.status,
            "Proposal answered"
        );

        Ok(proposal)
    }
}
