//! Fixed calendar commitments that repaired entries must not overlap.

use super::{Placement, TimeRange};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An immovable calendar event, such as a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCommitment {
    date: NaiveDate,
    range: TimeRange,
    title: String,
}

impl FixedCommitment {
    /// Creates a commitment on `date` spanning `range`.
    #[must_use]
    pub fn new(date: NaiveDate, range: TimeRange, title: impl Into<String>) -> Self {
        Self {
            date,
            range,
            title: title.into(),
        }
    }

    /// Commitment date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Commitment interval.
    #[must_use]
    pub const fn range(&self) -> TimeRange {
        self.range
    }

    /// Commitment title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether `placement` shares the date and intersects the interval.
    #[must_use]
    pub fn conflicts_with(&self, placement: &Placement) -> bool {
        self.date == placement.date
            && self
                .range
                .intersects(placement.start_time, placement.end_time)
    }
}
