//! Result of repairing a batch of candidate entries.

use super::{CandidateEntry, ClockTime, EntryInvariantError, Placement, ScheduledEntry};
use serde::Serialize;
use thiserror::Error;

/// Why a candidate could not be turned into a scheduled entry.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    /// After repair the start hour does not precede the end hour, or the
    /// interval leaves the work window at hour granularity.
    #[error("repaired interval {start}-{end} fails the hourly work window check")]
    HourWindow {
        /// Repaired start.
        start: ClockTime,
        /// Repaired end.
        end: ClockTime,
    },

    /// After repair the entry still violates an output invariant.
    #[error("repaired entry is invalid: {detail}")]
    Invariant {
        /// Human-readable description of the violation.
        detail: String,
        /// The violated invariant.
        #[serde(skip)]
        source: EntryInvariantError,
    },

    /// The repaired entry overlaps a fixed calendar commitment.
    #[error("repaired entry conflicts with commitment '{title}'")]
    ConflictsWithCommitment {
        /// Title of the conflicting commitment.
        title: String,
    },
}

impl From<EntryInvariantError> for RejectionReason {
    fn from(source: EntryInvariantError) -> Self {
        Self::Invariant {
            detail: source.to_string(),
            source,
        }
    }
}

/// A candidate that was dropped from the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedEntry {
    index: usize,
    candidate: CandidateEntry,
    attempted: Placement,
    reason: RejectionReason,
}

impl RejectedEntry {
    /// Creates a rejection record.
    #[must_use]
    pub const fn new(
        index: usize,
        candidate: CandidateEntry,
        attempted: Placement,
        reason: RejectionReason,
    ) -> Self {
        Self {
            index,
            candidate,
            attempted,
            reason,
        }
    }

    /// Position of the candidate in the input batch.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The candidate as received.
    #[must_use]
    pub const fn candidate(&self) -> &CandidateEntry {
        &self.candidate
    }

    /// The repaired placement that failed acceptance.
    #[must_use]
    pub const fn attempted(&self) -> Placement {
        self.attempted
    }

    /// Why the candidate was rejected.
    #[must_use]
    pub const fn reason(&self) -> &RejectionReason {
        &self.reason
    }
}

/// Accepted and rejected entries of one repaired batch.
///
/// Both lists preserve input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepairOutcome {
    accepted: Vec<ScheduledEntry>,
    rejected: Vec<RejectedEntry>,
}

impl RepairOutcome {
    /// Creates an outcome from its parts.
    #[must_use]
    pub const fn new(accepted: Vec<ScheduledEntry>, rejected: Vec<RejectedEntry>) -> Self {
        Self { accepted, rejected }
    }

    /// Entries that satisfy every constraint.
    #[must_use]
    pub fn accepted(&self) -> &[ScheduledEntry] {
        &self.accepted
    }

    /// Entries that could not be repaired.
    #[must_use]
    pub fn rejected(&self) -> &[RejectedEntry] {
        &self.rejected
    }

    /// Number of dropped entries.
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Whether every candidate was accepted.
    #[must_use]
    pub fn is_fully_accepted(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Splits the outcome into accepted and rejected lists.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ScheduledEntry>, Vec<RejectedEntry>) {
        (self.accepted, self.rejected)
    }
}
