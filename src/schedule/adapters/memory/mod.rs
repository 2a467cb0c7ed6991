//! In-memory adapters for offline use and tests.

mod proposer;

pub use proposer::StaticScheduleProposer;
