//! Application services for schedule planning.

mod assist;
mod repair;

pub use assist::{ScheduleAssistError, ScheduleAssistResult, ScheduleAssistService};
pub use repair::{RepairContext, ScheduleRepairEngine};
