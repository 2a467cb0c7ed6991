//! Error types for schedule domain construction and validation.

use super::{ClockTime, TimeRange};
use chrono::{NaiveDate, Weekday};
use thiserror::Error;

/// Error returned while parsing a time of day.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseClockTimeError {
    /// The text is not an `HH:MM` or `HH:MM:SS` time.
    #[error("invalid time of day '{0}', expected HH:MM")]
    Malformed(String),
}

/// Error returned when a time range would be empty or inverted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("time range {start}-{end} is empty, start must precede end")]
pub struct InvalidTimeRange {
    /// Requested start.
    pub start: ClockTime,
    /// Requested end.
    pub end: ClockTime,
}

/// Errors returned while building a [`super::ConstraintModel`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstraintError {
    /// The work window is empty or inverted.
    #[error("invalid work window: {0}")]
    InvalidWorkWindow(InvalidTimeRange),

    /// A break interval is empty or inverted.
    #[error("invalid break interval: {0}")]
    InvalidBreak(InvalidTimeRange),

    /// A break interval extends beyond the work window.
    #[error("break {break_range} lies outside the work window {work_window}")]
    BreakOutsideWindow {
        /// The offending break.
        break_range: TimeRange,
        /// The configured work window.
        work_window: TimeRange,
    },

    /// Two break intervals intersect.
    #[error("break {first} overlaps break {second}")]
    OverlappingBreaks {
        /// Earlier break.
        first: TimeRange,
        /// Later break.
        second: TimeRange,
    },

    /// Every day of the week is excluded, so no date can ever be scheduled.
    #[error("all seven weekdays are excluded")]
    AllWeekdaysExcluded,

    /// The continuous-duration threshold is zero.
    #[error("maximum continuous duration must be at least one minute")]
    ZeroContinuousLimit,
}

/// Output invariant violated by a scheduled entry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryInvariantError {
    /// The date falls on an excluded weekday.
    #[error("{date} falls on excluded weekday {weekday}")]
    ExcludedWeekday {
        /// Entry date.
        date: NaiveDate,
        /// Weekday of the entry date.
        weekday: Weekday,
    },

    /// The entry starts before the work window opens.
    #[error("start {start} precedes work start {work_start}")]
    StartsBeforeWindow {
        /// Entry start.
        start: ClockTime,
        /// Configured work start.
        work_start: ClockTime,
    },

    /// The entry ends after the work window closes.
    #[error("end {end} exceeds work end {work_end}")]
    EndsAfterWindow {
        /// Entry end.
        end: ClockTime,
        /// Configured work end.
        work_end: ClockTime,
    },

    /// The entry does not end strictly after it starts.
    #[error("interval {start}-{end} is empty")]
    EmptyInterval {
        /// Entry start.
        start: ClockTime,
        /// Entry end.
        end: ClockTime,
    },

    /// The entry intersects a break interval.
    #[error("interval {start}-{end} overlaps break {break_range}")]
    OverlapsBreak {
        /// Entry start.
        start: ClockTime,
        /// Entry end.
        end: ClockTime,
        /// The intersected break.
        break_range: TimeRange,
    },
}
