//! Domain model for schedule legalization.
//!
//! Untrusted [`CandidateEntry`] values and validated [`ScheduledEntry`]
//! values are distinct types; only a [`Placement`] that satisfies the
//! [`ConstraintModel`] can become a scheduled entry.

mod candidate;
mod commitment;
mod constraints;
mod entry;
mod error;
mod outcome;
mod proposal;
mod time;

pub use candidate::CandidateEntry;
pub use commitment::FixedCommitment;
pub use constraints::{BreakIntervalConfig, ConstraintConfig, ConstraintModel, FinalCheck};
pub use entry::{Placement, ScheduledEntry};
pub use error::{ConstraintError, EntryInvariantError, InvalidTimeRange, ParseClockTimeError};
pub use outcome::{RejectedEntry, RejectionReason, RepairOutcome};
pub use proposal::{ProposalError, decode_proposal};
pub(crate) use proposal::schedule_items;
pub use time::{ClockTime, TimeRange};
