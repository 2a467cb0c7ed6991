//! Shared world state for schedule repair BDD scenarios.

use rstest::fixture;
use taskplan::schedule::{
    domain::{CandidateEntry, ConstraintModel, RepairOutcome},
    services::{ScheduleAssistError, ScheduleRepairEngine},
};

/// Scenario world for schedule repair behaviour tests.
pub struct ScheduleWorld {
    pub engine: ScheduleRepairEngine,
    pub candidates: Vec<CandidateEntry>,
    pub generator_text: Option<String>,
    pub outcome: Option<Result<RepairOutcome, ScheduleAssistError>>,
}

impl ScheduleWorld {
    /// Creates a world with no proposed entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: ScheduleRepairEngine::default(),
            candidates: Vec::new(),
            generator_text: None,
            outcome: None,
        }
    }

    /// Returns the repair outcome recorded by a `When` step.
    pub fn outcome(&self) -> Result<&RepairOutcome, eyre::Report> {
        self.outcome
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing repair outcome in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected planning failure: {err}"))
    }

    /// Replaces the engine with one using `constraints`.
    pub fn use_constraints(&mut self, constraints: ConstraintModel) {
        self.engine = ScheduleRepairEngine::new(constraints);
    }
}

impl Default for ScheduleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ScheduleWorld {
    ScheduleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses an ISO calendar date captured from a step.
pub fn parse_date(text: &str) -> Result<chrono::NaiveDate, eyre::Report> {
    chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid date '{text}' in step: {err}"))
}
