//! The legal scheduling window and its configuration surface.

use super::{ClockTime, ConstraintError, TimeRange};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

const DEFAULT_MAX_CONTINUOUS_MINUTES: u32 = 120;

/// Granularity of the final acceptance check applied after repair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalCheck {
    /// Compare whole hours: the start hour must precede the end hour.
    #[default]
    Hour,
    /// Compare exact minutes.
    Minute,
}

/// Immutable description of where and when work may be scheduled.
///
/// Construct through [`ConstraintConfig::build`] or use
/// [`ConstraintModel::default`] for the 10:00-18:00 weekday window with a
/// 12:00-13:00 lunch break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintModel {
    work_window: TimeRange,
    breaks: Vec<TimeRange>,
    excluded_weekdays: Vec<Weekday>,
    max_continuous_minutes: u32,
    final_check: FinalCheck,
}

impl Default for ConstraintModel {
    fn default() -> Self {
        Self {
            work_window: TimeRange::new_unchecked(ClockTime::at(10, 0), ClockTime::at(18, 0)),
            breaks: vec![TimeRange::new_unchecked(
                ClockTime::at(12, 0),
                ClockTime::at(13, 0),
            )],
            excluded_weekdays: vec![Weekday::Sat, Weekday::Sun],
            max_continuous_minutes: DEFAULT_MAX_CONTINUOUS_MINUTES,
            final_check: FinalCheck::Hour,
        }
    }
}

impl ConstraintModel {
    /// Start of the work window.
    #[must_use]
    pub const fn work_start(&self) -> ClockTime {
        self.work_window.start()
    }

    /// End of the work window.
    #[must_use]
    pub const fn work_end(&self) -> ClockTime {
        self.work_window.end()
    }

    /// The whole work window.
    #[must_use]
    pub const fn work_window(&self) -> TimeRange {
        self.work_window
    }

    /// Break intervals in ascending order.
    #[must_use]
    pub fn breaks(&self) -> &[TimeRange] {
        &self.breaks
    }

    /// Weekdays on which nothing may be scheduled.
    #[must_use]
    pub fn excluded_weekdays(&self) -> &[Weekday] {
        &self.excluded_weekdays
    }

    /// Longest task, in minutes, that is relocated rather than truncated
    /// when it crosses a break.
    #[must_use]
    pub const fn max_continuous_minutes(&self) -> u32 {
        self.max_continuous_minutes
    }

    /// Granularity of the final acceptance check.
    #[must_use]
    pub const fn final_check(&self) -> FinalCheck {
        self.final_check
    }

    /// Whether `date` falls on an excluded weekday.
    #[must_use]
    pub fn is_excluded_weekday(&self, date: NaiveDate) -> bool {
        self.excluded_weekdays.contains(&date.weekday())
    }

    /// Rolls `date` forward by the fewest days needed to reach a permitted
    /// weekday. Permitted dates are returned unchanged.
    ///
    /// With Saturday and Sunday excluded, Saturday moves two days and Sunday
    /// one. Dates at the very end of the calendar range that cannot be rolled
    /// are returned as given.
    #[must_use]
    pub fn next_permitted_weekday(&self, date: NaiveDate) -> NaiveDate {
        date.iter_days()
            .take(7)
            .find(|candidate| !self.is_excluded_weekday(*candidate))
            .unwrap_or(date)
    }

    /// Whether `[start, end)` intersects any break interval.
    #[must_use]
    pub fn overlaps_break(&self, start: ClockTime, end: ClockTime) -> bool {
        self.first_break_overlapping(start, end).is_some()
    }

    /// First break intersecting `[start, end)`, if any.
    #[must_use]
    pub fn first_break_overlapping(&self, start: ClockTime, end: ClockTime) -> Option<&TimeRange> {
        self.breaks.iter().find(|range| range.intersects(start, end))
    }

    /// Break that begins exactly at `time`, if any.
    #[must_use]
    pub fn break_starting_at(&self, time: ClockTime) -> Option<&TimeRange> {
        self.breaks.iter().find(|range| range.start() == time)
    }

    /// Break whose half-open interval contains `time`, if any.
    #[must_use]
    pub fn break_containing(&self, time: ClockTime) -> Option<&TimeRange> {
        self.breaks.iter().find(|range| range.contains(time))
    }
}

/// Serializable break interval as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakIntervalConfig {
    /// Break start.
    pub start: ClockTime,
    /// Break end.
    pub end: ClockTime,
}

impl BreakIntervalConfig {
    /// Creates a break interval configuration.
    #[must_use]
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }
}

/// Configuration surface of the repair engine.
///
/// Every field is optional when deserialized; missing fields take the
/// defaults of [`ConstraintModel::default`].
///
/// # Examples
///
/// ```
/// use taskplan::schedule::domain::ConstraintConfig;
///
/// let config: ConstraintConfig = serde_json::from_str(
///     r#"{ "workStart": "09:00", "excludedWeekdays": ["Fri", "Sat", "Sun"] }"#,
/// ).expect("valid configuration");
/// let model = config.build().expect("consistent constraints");
/// assert_eq!(model.work_start().to_string(), "09:00");
/// assert_eq!(model.work_end().to_string(), "18:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstraintConfig {
    /// Start of the daily work window.
    pub work_start: ClockTime,
    /// End of the daily work window.
    pub work_end: ClockTime,
    /// Break intervals excluded from scheduling.
    pub break_intervals: Vec<BreakIntervalConfig>,
    /// Weekdays that never host an entry.
    ///
    /// Deserializes from names (`"Sat"`, `"sunday"`) or from indices
    /// counted from Sunday (`0` = Sunday, `6` = Saturday).
    #[serde(deserialize_with = "deserialize_weekdays")]
    pub excluded_weekdays: Vec<Weekday>,
    /// Relocate-versus-truncate threshold for break-crossing entries.
    pub max_continuous_minutes: u32,
    /// Granularity of the final acceptance check.
    pub final_check: FinalCheck,
}

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[derive(Deserialize)]
#[serde(untagged)]
enum WeekdayRepr {
    Index(u64),
    Name(Weekday),
}

fn deserialize_weekdays<'de, D>(deserializer: D) -> Result<Vec<Weekday>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<WeekdayRepr>::deserialize(deserializer)?
        .into_iter()
        .map(|repr| match repr {
            WeekdayRepr::Name(weekday) => Ok(weekday),
            WeekdayRepr::Index(index) => usize::try_from(index)
                .ok()
                .and_then(|position| WEEKDAYS_FROM_SUNDAY.get(position).copied())
                .ok_or_else(|| {
                    D::Error::custom(format!(
                        "weekday index {index} out of range, expected 0 (Sunday) to 6 (Saturday)"
                    ))
                }),
        })
        .collect()
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self::from(&ConstraintModel::default())
    }
}

impl From<&ConstraintModel> for ConstraintConfig {
    fn from(model: &ConstraintModel) -> Self {
        Self {
            work_start: model.work_start(),
            work_end: model.work_end(),
            break_intervals: model
                .breaks()
                .iter()
                .map(|range| BreakIntervalConfig::new(range.start(), range.end()))
                .collect(),
            excluded_weekdays: model.excluded_weekdays().to_vec(),
            max_continuous_minutes: model.max_continuous_minutes(),
            final_check: model.final_check(),
        }
    }
}

impl ConstraintConfig {
    /// Sets the work window.
    #[must_use]
    pub const fn with_work_window(mut self, start: ClockTime, end: ClockTime) -> Self {
        self.work_start = start;
        self.work_end = end;
        self
    }

    /// Replaces the break intervals.
    #[must_use]
    pub fn with_breaks(mut self, breaks: impl IntoIterator<Item = BreakIntervalConfig>) -> Self {
        self.break_intervals = breaks.into_iter().collect();
        self
    }

    /// Replaces the excluded weekdays.
    #[must_use]
    pub fn with_excluded_weekdays(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        self.excluded_weekdays = weekdays.into_iter().collect();
        self
    }

    /// Sets the relocate-versus-truncate threshold.
    #[must_use]
    pub const fn with_max_continuous_minutes(mut self, minutes: u32) -> Self {
        self.max_continuous_minutes = minutes;
        self
    }

    /// Sets the final check granularity.
    #[must_use]
    pub const fn with_final_check(mut self, final_check: FinalCheck) -> Self {
        self.final_check = final_check;
        self
    }

    /// Validates the configuration and builds the constraint model.
    ///
    /// Breaks are sorted by start time; duplicate weekdays are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the work window or a break is empty,
    /// a break leaves the work window, two breaks overlap, all seven
    /// weekdays are excluded, or the continuous limit is zero.
    pub fn build(&self) -> Result<ConstraintModel, ConstraintError> {
        let work_window = TimeRange::new(self.work_start, self.work_end)
            .map_err(ConstraintError::InvalidWorkWindow)?;

        let mut breaks = self
            .break_intervals
            .iter()
            .map(|interval| {
                TimeRange::new(interval.start, interval.end).map_err(ConstraintError::InvalidBreak)
            })
            .collect::<Result<Vec<_>, _>>()?;
        breaks.sort();

        if let Some(outside) = breaks.iter().find(|range| !work_window.encloses(range)) {
            return Err(ConstraintError::BreakOutsideWindow {
                break_range: *outside,
                work_window,
            });
        }

        if let Some((first, second)) = breaks
            .iter()
            .zip(breaks.iter().skip(1))
            .find(|(first, second)| first.overlaps(second))
        {
            return Err(ConstraintError::OverlappingBreaks {
                first: *first,
                second: *second,
            });
        }

        let mut excluded_weekdays: Vec<Weekday> = Vec::with_capacity(self.excluded_weekdays.len());
        for weekday in &self.excluded_weekdays {
            if !excluded_weekdays.contains(weekday) {
                excluded_weekdays.push(*weekday);
            }
        }
        if excluded_weekdays.len() >= 7 {
            return Err(ConstraintError::AllWeekdaysExcluded);
        }

        if self.max_continuous_minutes == 0 {
            return Err(ConstraintError::ZeroContinuousLimit);
        }

        Ok(ConstraintModel {
            work_window,
            breaks,
            excluded_weekdays,
            max_continuous_minutes: self.max_continuous_minutes,
            final_check: self.final_check,
        })
    }
}

impl TryFrom<ConstraintConfig> for ConstraintModel {
    type Error = ConstraintError;

    fn try_from(config: ConstraintConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}
