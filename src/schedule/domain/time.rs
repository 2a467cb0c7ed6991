//! Time-of-day values and half-open ranges used by the scheduling window.

use super::{InvalidTimeRange, ParseClockTimeError};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Wall-clock time of day with minute precision.
///
/// Values range from `00:00` to `24:00` inclusive; `24:00` only exists so a
/// work window may close at midnight. Arithmetic saturates at `24:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    /// The start of the day.
    pub const MIDNIGHT: Self = Self(0);

    /// The end of the day (`24:00`).
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY);

    /// Creates a time from an hour and minute.
    ///
    /// Returns `None` unless the value lies within `00:00..=24:00`.
    #[must_use]
    pub const fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if minute >= MINUTES_PER_HOUR || hour > 24 || (hour == 24 && minute > 0) {
            return None;
        }
        Some(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Creates a time from minutes elapsed since midnight.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes > MINUTES_PER_DAY {
            return None;
        }
        Some(Self(minutes))
    }

    pub(crate) const fn at(hour: u32, minute: u32) -> Self {
        Self(hour * MINUTES_PER_HOUR + minute)
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Hour component (`0..=24`).
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.0.div_euclid(MINUTES_PER_HOUR)
    }

    /// Minute component (`0..60`).
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.0.rem_euclid(MINUTES_PER_HOUR)
    }

    /// Adds minutes, saturating at `24:00`.
    #[must_use]
    pub const fn saturating_add_minutes(self, minutes: u32) -> Self {
        let total = self.0.saturating_add(minutes);
        if total > MINUTES_PER_DAY {
            Self::END_OF_DAY
        } else {
            Self(total)
        }
    }

    /// Adds whole hours, saturating at `24:00`.
    #[must_use]
    pub const fn saturating_add_hours(self, hours: u32) -> Self {
        self.saturating_add_minutes(hours.saturating_mul(MINUTES_PER_HOUR))
    }

    /// Signed number of minutes from `self` to `later`.
    ///
    /// Negative when `later` precedes `self`.
    #[must_use]
    pub fn minutes_until(self, later: Self) -> i64 {
        i64::from(later.0) - i64::from(self.0)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self::at(time.hour(), time.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if matches!(trimmed, "24:00" | "24:00:00") {
            return Ok(Self::END_OF_DAY);
        }
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(Self::from)
            .map_err(|_| ParseClockTimeError::Malformed(value.to_owned()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Half-open time-of-day interval `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: ClockTime,
    end: ClockTime,
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: ClockTime,
    end: ClockTime,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = InvalidTimeRange;

    fn try_from(raw: RawTimeRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// Creates a non-empty range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimeRange`] when `start >= end`.
    pub const fn new(start: ClockTime, end: ClockTime) -> Result<Self, InvalidTimeRange> {
        if start.0 >= end.0 {
            return Err(InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub(crate) const fn new_unchecked(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Inclusive start of the range.
    #[must_use]
    pub const fn start(&self) -> ClockTime {
        self.start
    }

    /// Exclusive end of the range.
    #[must_use]
    pub const fn end(&self) -> ClockTime {
        self.end
    }

    /// Length of the range in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.end.0 - self.start.0
    }

    /// Whether `time` falls inside the range.
    #[must_use]
    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time < self.end
    }

    /// Whether `[start, end)` intersects this range.
    #[must_use]
    pub fn intersects(&self, start: ClockTime, end: ClockTime) -> bool {
        start < self.end && self.start < end
    }

    /// Whether two ranges intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.intersects(other.start, other.end)
    }

    /// Whether `other` lies entirely within this range.
    #[must_use]
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
