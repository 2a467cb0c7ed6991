//! Validated schedule entries that satisfy every placement invariant.

use super::{CandidateEntry, ClockTime, ConstraintModel, EntryInvariantError};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A proposed date and interval, before invariants have been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Calendar date.
    pub date: NaiveDate,
    /// Inclusive start.
    pub start_time: ClockTime,
    /// Exclusive end.
    pub end_time: ClockTime,
}

impl Placement {
    /// Creates a placement.
    #[must_use]
    pub const fn new(date: NaiveDate, start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            date,
            start_time,
            end_time,
        }
    }

    /// Checks the placement against every output invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`EntryInvariantError`] found, checking the weekday,
    /// the work window, interval order and break overlap in that order.
    pub fn check(&self, constraints: &ConstraintModel) -> Result<(), EntryInvariantError> {
        if constraints.is_excluded_weekday(self.date) {
            return Err(EntryInvariantError::ExcludedWeekday {
                date: self.date,
                weekday: self.date.weekday(),
            });
        }
        if self.start_time < constraints.work_start() {
            return Err(EntryInvariantError::StartsBeforeWindow {
                start: self.start_time,
                work_start: constraints.work_start(),
            });
        }
        if self.end_time > constraints.work_end() {
            return Err(EntryInvariantError::EndsAfterWindow {
                end: self.end_time,
                work_end: constraints.work_end(),
            });
        }
        if self.start_time >= self.end_time {
            return Err(EntryInvariantError::EmptyInterval {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if let Some(break_range) =
            constraints.first_break_overlapping(self.start_time, self.end_time)
        {
            return Err(EntryInvariantError::OverlapsBreak {
                start: self.start_time,
                end: self.end_time,
                break_range: *break_range,
            });
        }
        Ok(())
    }
}

/// A schedule entry known to satisfy the constraint model it was built
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    task_title: Option<String>,
    date: NaiveDate,
    start_time: ClockTime,
    end_time: ClockTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ScheduledEntry {
    /// Validates a placement for a candidate's pass-through fields.
    ///
    /// # Errors
    ///
    /// Returns [`EntryInvariantError`] when the placement violates the
    /// constraint model.
    pub fn try_new(
        source: &CandidateEntry,
        placement: Placement,
        constraints: &ConstraintModel,
    ) -> Result<Self, EntryInvariantError> {
        placement.check(constraints)?;
        Ok(Self {
            task_id: source.task_id().map(ToOwned::to_owned),
            task_title: source.task_title().map(ToOwned::to_owned),
            date: placement.date,
            start_time: placement.start_time,
            end_time: placement.end_time,
            reason: source.reason().map(ToOwned::to_owned),
        })
    }

    /// Opaque task identifier.
    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    /// Display title.
    #[must_use]
    pub fn task_title(&self) -> Option<&str> {
        self.task_title.as_deref()
    }

    /// Scheduled date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Inclusive start.
    #[must_use]
    pub const fn start_time(&self) -> ClockTime {
        self.start_time
    }

    /// Exclusive end.
    #[must_use]
    pub const fn end_time(&self) -> ClockTime {
        self.end_time
    }

    /// Free-text rationale.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Date and interval of this entry.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        Placement::new(self.date, self.start_time, self.end_time)
    }

    /// Converts the entry back into candidate form, as it would arrive from
    /// a generator.
    #[must_use]
    pub fn to_candidate(&self) -> CandidateEntry {
        let mut candidate = CandidateEntry::new()
            .with_date(self.date.format("%Y-%m-%d").to_string())
            .with_start_time(self.start_time.to_string())
            .with_end_time(self.end_time.to_string());
        if let Some(task_id) = self.task_id.as_deref() {
            candidate = candidate.with_task_id(task_id);
        }
        if let Some(task_title) = self.task_title.as_deref() {
            candidate = candidate.with_task_title(task_title);
        }
        if let Some(reason) = self.reason.as_deref() {
            candidate = candidate.with_reason(reason);
        }
        candidate
    }
}
