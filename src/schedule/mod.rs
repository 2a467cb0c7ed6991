//! AI-assisted schedule legalization.
//!
//! A language model proposes when to work on which task; its answer is
//! untrusted. This module repairs each proposed entry so it falls on a
//! permitted weekday, inside the work window and outside break intervals,
//! and reports the entries it could not repair.
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: constraint model, candidate and validated entries
//!   ([`domain::ConstraintModel`], [`domain::CandidateEntry`], [`domain::ScheduledEntry`])
//! - **Ports**: the generator contract ([`ports::ScheduleProposer`])
//! - **Adapters**: canned proposals and file-based configuration
//!   ([`adapters::memory::StaticScheduleProposer`], [`adapters::config_file`])
//! - **Services**: the repair engine and the planning service
//!   ([`services::ScheduleRepairEngine`], [`services::ScheduleAssistService`])
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use taskplan::schedule::domain::{ConstraintModel, decode_proposal};
//! use taskplan::schedule::services::{RepairContext, ScheduleRepairEngine};
//!
//! let proposal = r#"[
//!     {"taskId": "t-1", "date": "2024-01-09", "startTime": "11:00", "endTime": "14:00"},
//!     {"taskId": "t-2", "date": "2024-01-09", "startTime": "19:00", "endTime": "20:00"}
//! ]"#;
//! let candidates = decode_proposal(proposal).expect("decodable proposal");
//! let today = NaiveDate::from_ymd_opt(2024, 1, 8).expect("valid date");
//!
//! let engine = ScheduleRepairEngine::new(ConstraintModel::default());
//! let outcome = engine.repair(&candidates, &RepairContext::new(today));
//!
//! assert_eq!(outcome.accepted().len(), 1);
//! assert_eq!(outcome.accepted()[0].end_time().to_string(), "12:00");
//! assert_eq!(outcome.rejected_count(), 1);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
