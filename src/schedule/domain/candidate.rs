//! Untrusted schedule proposals as produced by an external generator.

use super::ClockTime;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A possibly-invalid scheduling proposal for one task occurrence.
///
/// Every field is optional and kept as raw text. Decoding from JSON never
/// fails: scalar values of the wrong type (numbers, booleans) are kept as
/// their textual form and anything else is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct CandidateEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    task_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl CandidateEntry {
    /// Creates a candidate with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a candidate from an arbitrary JSON value.
    ///
    /// Non-object values yield an empty candidate. Both camelCase and
    /// `snake_case` keys are recognised.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            task_id: text_field(object, &["taskId", "task_id", "id"]),
            task_title: text_field(object, &["taskTitle", "task_title", "title"]),
            date: text_field(object, &["date"]),
            start_time: text_field(object, &["startTime", "start_time", "start"]),
            end_time: text_field(object, &["endTime", "end_time", "end"]),
            reason: text_field(object, &["reason"]),
        }
    }

    /// Sets the task identifier.
    #[must_use]
    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    /// Sets the task title.
    #[must_use]
    pub fn with_task_title(mut self, task_title: impl Into<String>) -> Self {
        self.task_title = Some(task_title.into());
        self
    }

    /// Sets the raw date text.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the raw start time text.
    #[must_use]
    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Sets the raw end time text.
    #[must_use]
    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Sets the rationale.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
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

    /// Raw date text.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Raw start time text.
    #[must_use]
    pub fn start_time(&self) -> Option<&str> {
        self.start_time.as_deref()
    }

    /// Raw end time text.
    #[must_use]
    pub fn end_time(&self) -> Option<&str> {
        self.end_time.as_deref()
    }

    /// Free-text rationale.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Parses the date as `YYYY-MM-DD`, or takes the date part of an
    /// RFC 3339 timestamp.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let trimmed = self.date.as_deref()?.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed)
                    .ok()
                    .map(|timestamp| timestamp.date_naive())
            })
    }

    /// Parses the start time, if present and well formed.
    #[must_use]
    pub fn parsed_start_time(&self) -> Option<ClockTime> {
        self.start_time.as_deref()?.parse().ok()
    }

    /// Parses the end time, if present and well formed.
    #[must_use]
    pub fn parsed_end_time(&self) -> Option<ClockTime> {
        self.end_time.as_deref()?.parse().ok()
    }
}

impl From<Value> for CandidateEntry {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

fn text_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| object.get(*key))
        .and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
