//! Port contracts for schedule planning.
//!
//! Ports define infrastructure-agnostic interfaces used by schedule services.

pub mod proposer;

#[cfg(test)]
pub use proposer::MockScheduleProposer;
pub use proposer::{
    ProposalRequest, ProposerError, ProposerResult, ScheduleProposer, TaskSummary,
};
