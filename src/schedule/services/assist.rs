//! Service layer for AI-assisted schedule planning.

use super::repair::{RepairContext, ScheduleRepairEngine};
use crate::schedule::{
    domain::{ConstraintModel, FixedCommitment, ProposalError, RepairOutcome, decode_proposal},
    ports::{ProposalRequest, ProposerError, ScheduleProposer},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for schedule planning.
///
/// Only whole-batch failures surface here; problems with individual
/// entries are reported through [`RepairOutcome::rejected`].
#[derive(Debug, Error)]
pub enum ScheduleAssistError {
    /// The generator failed.
    #[error(transparent)]
    Proposer(#[from] ProposerError),
    /// The generator output could not be decoded.
    #[error(transparent)]
    Proposal(#[from] ProposalError),
}

/// Result type for schedule planning operations.
pub type ScheduleAssistResult<T> = Result<T, ScheduleAssistError>;

/// Asks a generator for a schedule and legalizes the answer.
#[derive(Clone)]
pub struct ScheduleAssistService<P, C>
where
    P: ScheduleProposer,
    C: Clock + Send + Sync,
{
    proposer: Arc<P>,
    clock: Arc<C>,
    engine: ScheduleRepairEngine,
}

impl<P, C> ScheduleAssistService<P, C>
where
    P: ScheduleProposer,
    C: Clock + Send + Sync,
{
    /// Creates a planning service.
    #[must_use]
    pub const fn new(proposer: Arc<P>, clock: Arc<C>, constraints: ConstraintModel) -> Self {
        Self {
            proposer,
            clock,
            engine: ScheduleRepairEngine::new(constraints),
        }
    }

    /// Returns the repair engine.
    #[must_use]
    pub const fn engine(&self) -> &ScheduleRepairEngine {
        &self.engine
    }

    /// Requests a proposal and repairs it against the constraint model.
    ///
    /// Candidates with missing dates fall back to the request's start date,
    /// or today's date when the request has none.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleAssistError::Proposer`] when the generator fails and
    /// [`ScheduleAssistError::Proposal`] when its output holds no decodable
    /// schedule.
    pub async fn plan(
        &self,
        request: &ProposalRequest,
        commitments: Vec<FixedCommitment>,
    ) -> ScheduleAssistResult<RepairOutcome> {
        let text = self.proposer.propose(request).await?;
        let candidates = decode_proposal(&text)?;
        tracing::debug!(
            candidates = candidates.len(),
            tasks = request.tasks.len(),
            "schedule proposal decoded"
        );

        let context = request
            .start_date
            .map_or_else(|| RepairContext::from_clock(&*self.clock), RepairContext::new)
            .with_commitments(commitments);
        Ok(self.engine.repair(&candidates, &context))
    }
}
