//! Shared fixtures and helpers for schedule tests.

use crate::schedule::{
    domain::{ClockTime, ConstraintModel, TimeRange},
    services::{RepairContext, ScheduleRepairEngine},
};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Parses an `HH:MM` literal.
pub fn time(text: &str) -> ClockTime {
    text.parse().expect("test time literal should parse")
}

/// Builds a range from two `HH:MM` literals.
pub fn range(start: &str, end: &str) -> TimeRange {
    TimeRange::new(time(start), time(end)).expect("test range should be non-empty")
}

/// Builds a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}

/// Monday 2024-01-08.
#[fixture]
pub fn monday() -> NaiveDate {
    date(2024, 1, 8)
}

#[fixture]
pub fn default_engine() -> ScheduleRepairEngine {
    ScheduleRepairEngine::new(ConstraintModel::default())
}

#[fixture]
pub fn context(monday: NaiveDate) -> RepairContext {
    RepairContext::new(monday)
}

/// Clock frozen at noon local time on a given date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn on(day: NaiveDate) -> Self {
        let noon = day.and_hms_opt(12, 0, 0).expect("noon should exist");
        let now = Local
            .from_local_datetime(&noon)
            .earliest()
            .expect("noon should map to a local time");
        Self { now }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}
