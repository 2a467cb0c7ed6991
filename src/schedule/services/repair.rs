//! Deterministic repair of untrusted schedule proposals.

use crate::schedule::domain::{
    CandidateEntry, ClockTime, ConstraintModel, FinalCheck, FixedCommitment, Placement,
    RejectedEntry, RejectionReason, RepairOutcome, ScheduledEntry, schedule_items,
};
use chrono::NaiveDate;
use mockable::Clock;

const DEFAULT_DURATION_HOURS: u32 = 1;

/// Request-scoped inputs of a repair pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairContext {
    fallback_date: NaiveDate,
    commitments: Vec<FixedCommitment>,
}

impl RepairContext {
    /// Creates a context whose missing or malformed dates fall back to
    /// `fallback_date`.
    #[must_use]
    pub const fn new(fallback_date: NaiveDate) -> Self {
        Self {
            fallback_date,
            commitments: Vec::new(),
        }
    }

    /// Creates a context whose fallback date is today's local date.
    #[must_use]
    pub fn from_clock(clock: &impl Clock) -> Self {
        Self::new(clock.local().date_naive())
    }

    /// Adds fixed commitments that accepted entries may not overlap.
    #[must_use]
    pub fn with_commitments(
        mut self,
        commitments: impl IntoIterator<Item = FixedCommitment>,
    ) -> Self {
        self.commitments.extend(commitments);
        self
    }

    /// Date substituted for missing or malformed candidate dates.
    #[must_use]
    pub const fn fallback_date(&self) -> NaiveDate {
        self.fallback_date
    }

    /// Fixed commitments for this pass.
    #[must_use]
    pub fn commitments(&self) -> &[FixedCommitment] {
        &self.commitments
    }
}

/// Turns candidate entries into constraint-satisfying entries.
///
/// Each candidate is repaired independently: the date is rolled off
/// excluded weekdays, missing times fall back to the work start, the
/// interval is clamped to the work window, moved off break starts and
/// relocated or truncated when it crosses a break. Candidates that remain
/// invalid are reported in [`RepairOutcome::rejected`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskplan::schedule::domain::{CandidateEntry, ConstraintModel};
/// use taskplan::schedule::services::{RepairContext, ScheduleRepairEngine};
///
/// let engine = ScheduleRepairEngine::new(ConstraintModel::default());
/// let today = NaiveDate::from_ymd_opt(2024, 1, 8).expect("valid date");
/// let candidate = CandidateEntry::new()
///     .with_date("2024-01-06")
///     .with_start_time("11:30")
///     .with_end_time("12:30");
///
/// let outcome = engine.repair(&[candidate], &RepairContext::new(today));
/// let entry = &outcome.accepted()[0];
/// assert_eq!(entry.date().to_string(), "2024-01-08");
/// assert_eq!(entry.start_time().to_string(), "13:00");
/// assert_eq!(entry.end_time().to_string(), "14:00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleRepairEngine {
    constraints: ConstraintModel,
}

impl ScheduleRepairEngine {
    /// Creates an engine for the given constraints.
    #[must_use]
    pub const fn new(constraints: ConstraintModel) -> Self {
        Self { constraints }
    }

    /// Returns the constraint model.
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintModel {
        &self.constraints
    }

    /// Repairs a batch of candidates.
    ///
    /// Never fails: every candidate ends up either accepted or rejected,
    /// and both lists keep input order.
    #[must_use]
    pub fn repair(&self, candidates: &[CandidateEntry], context: &RepairContext) -> RepairOutcome {
        let mut accepted = Vec::with_capacity(candidates.len());
        let mut rejected = Vec::new();

        for (index, candidate) in candidates.iter().enumerate() {
            let placement = self.repair_placement(index, candidate, context);
            match self.accept(candidate, placement, context) {
                Ok(entry) => accepted.push(entry),
                Err(reason) => {
                    tracing::warn!(
                        index,
                        task_id = candidate.task_id().unwrap_or_default(),
                        %reason,
                        "dropping unrepairable schedule entry"
                    );
                    rejected.push(RejectedEntry::new(
                        index,
                        candidate.clone(),
                        placement,
                        reason,
                    ));
                }
            }
        }

        tracing::info!(
            accepted = accepted.len(),
            rejected = rejected.len(),
            "schedule proposal repaired"
        );
        RepairOutcome::new(accepted, rejected)
    }

    /// Repairs the candidate values in a JSON array, or in an object holding
    /// the array under `schedule`, `entries` or `tasks`.
    ///
    /// Any other input is treated as an empty batch.
    #[must_use]
    pub fn repair_values(
        &self,
        values: &serde_json::Value,
        context: &RepairContext,
    ) -> RepairOutcome {
        let candidates: Vec<CandidateEntry> = schedule_items(values)
            .map(|items| items.iter().map(CandidateEntry::from_value).collect())
            .unwrap_or_default();
        self.repair(&candidates, context)
    }

    fn repair_placement(
        &self,
        index: usize,
        candidate: &CandidateEntry,
        context: &RepairContext,
    ) -> Placement {
        let constraints = &self.constraints;

        let date = self.normalize_date(index, candidate, context);

        let requested_start = candidate.parsed_start_time().unwrap_or_else(|| {
            tracing::debug!(index, "start time missing or malformed, using work start");
            constraints.work_start()
        });
        let requested_end = candidate.parsed_end_time().unwrap_or_else(|| {
            tracing::debug!(index, "end time missing or malformed, using default duration");
            constraints.work_start().saturating_add_hours(DEFAULT_DURATION_HOURS)
        });

        let mut start = requested_start;
        let mut end = requested_end;

        if start < constraints.work_start() {
            tracing::debug!(index, %start, "start clamped to work start");
            start = constraints.work_start();
        }

        if constraints.break_containing(start).is_some() {
            let advanced = advance_past_breaks(constraints, start);
            tracing::debug!(index, %start, %advanced, "start moved past break");
            start = advanced;
        }

        if end > constraints.work_end() {
            tracing::debug!(index, %end, "end clamped to work end");
            end = constraints.work_end();
        }

        if end <= start {
            end = start
                .saturating_add_hours(DEFAULT_DURATION_HOURS)
                .min(constraints.work_end());
            tracing::debug!(index, %start, %end, "empty interval given default duration");
        }

        let requested_minutes = positive_minutes(requested_start, requested_end);
        for range in constraints.breaks() {
            if !(start < range.start() && end > range.start()) {
                continue;
            }
            let duration = requested_minutes
                .or_else(|| positive_minutes(start, end))
                .unwrap_or_default();
            if duration <= constraints.max_continuous_minutes() {
                start = advance_past_breaks(constraints, range.end());
                end = start
                    .saturating_add_hours(duration.div_ceil(60))
                    .min(constraints.work_end());
                tracing::debug!(index, %start, %end, break_range = %range, "relocated after break");
            } else {
                end = range.start();
                tracing::debug!(index, %start, %end, break_range = %range, "truncated at break");
            }
        }

        Placement::new(date, start, end)
    }

    fn normalize_date(
        &self,
        index: usize,
        candidate: &CandidateEntry,
        context: &RepairContext,
    ) -> NaiveDate {
        let date = candidate.parsed_date().unwrap_or_else(|| {
            tracing::debug!(
                index,
                fallback = %context.fallback_date(),
                "date missing or malformed, using fallback date"
            );
            context.fallback_date()
        });
        let rolled = self.constraints.next_permitted_weekday(date);
        if rolled != date {
            tracing::debug!(index, from = %date, to = %rolled, "date rolled off excluded weekday");
        }
        rolled
    }

    fn accept(
        &self,
        candidate: &CandidateEntry,
        placement: Placement,
        context: &RepairContext,
    ) -> Result<ScheduledEntry, RejectionReason> {
        if self.constraints.final_check() == FinalCheck::Hour
            && !self.passes_hour_check(placement.start_time, placement.end_time)
        {
            return Err(RejectionReason::HourWindow {
                start: placement.start_time,
                end: placement.end_time,
            });
        }

        let entry = ScheduledEntry::try_new(candidate, placement, &self.constraints)?;

        if let Some(commitment) = context
            .commitments()
            .iter()
            .find(|commitment| commitment.conflicts_with(&placement))
        {
            return Err(RejectionReason::ConflictsWithCommitment {
                title: commitment.title().to_owned(),
            });
        }

        Ok(entry)
    }

    fn passes_hour_check(&self, start: ClockTime, end: ClockTime) -> bool {
        start.hour() >= self.constraints.work_start().hour()
            && end.hour() <= self.constraints.work_end().hour()
            && start.hour() < end.hour()
    }
}

/// Moves `time` to the end of any break containing it, following breaks
/// that touch end to start.
fn advance_past_breaks(constraints: &ConstraintModel, mut time: ClockTime) -> ClockTime {
    while let Some(range) = constraints.break_containing(time) {
        time = range.end();
    }
    time
}

fn positive_minutes(start: ClockTime, end: ClockTime) -> Option<u32> {
    u32::try_from(start.minutes_until(end))
        .ok()
        .filter(|minutes| *minutes > 0)
}
