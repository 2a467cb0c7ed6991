//! Port for the external generator of schedule proposals.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for proposer operations.
pub type ProposerResult<T> = Result<T, ProposerError>;

/// Summary of a task the generator is asked to place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    /// Opaque task identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Due date, when the task has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Estimated effort in minutes, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
}

impl TaskSummary {
    /// Creates a summary with only the required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
            estimated_minutes: None,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the effort estimate.
    #[must_use]
    pub const fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }
}

/// What the generator is asked to schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRequest {
    /// Tasks to place.
    pub tasks: Vec<TaskSummary>,
    /// First day of the planning horizon. Also used as the fallback date
    /// for proposals with missing dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl ProposalRequest {
    /// Creates a request for the given tasks.
    #[must_use]
    pub fn new(tasks: impl IntoIterator<Item = TaskSummary>) -> Self {
        Self {
            tasks: tasks.into_iter().collect(),
            start_date: None,
        }
    }

    /// Sets the first day of the planning horizon.
    #[must_use]
    pub const fn starting_on(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
}

/// Opaque generator of untrusted schedule proposals, typically a
/// language model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleProposer: Send + Sync {
    /// Returns the raw proposal text for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ProposerError`] when the generator cannot be reached or
    /// refuses the request.
    async fn propose(&self, request: &ProposalRequest) -> ProposerResult<String>;
}

/// Errors returned by proposer implementations.
#[derive(Debug, Clone, Error)]
pub enum ProposerError {
    /// The generator is not configured or not reachable.
    #[error("schedule generator unavailable: {0}")]
    Unavailable(String),

    /// The generator refused to produce a proposal.
    #[error("schedule generator refused the request: {0}")]
    Refused(String),

    /// Transport or client failure.
    #[error("schedule generator failure: {0}")]
    Upstream(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProposerError {
    /// Wraps a transport or client error.
    pub fn upstream(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Upstream(Arc::new(err))
    }
}
