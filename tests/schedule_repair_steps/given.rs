//! Given steps for schedule repair BDD scenarios.

use super::world::ScheduleWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskplan::schedule::domain::{CandidateEntry, ConstraintModel};

#[given("the default working constraints")]
fn default_constraints(world: &mut ScheduleWorld) {
    world.use_constraints(ConstraintModel::default());
}

#[given(r#"a proposed entry "{task_id}" on "{date}" from "{start}" to "{end}""#)]
fn proposed_entry(
    world: &mut ScheduleWorld,
    task_id: String,
    date: String,
    start: String,
    end: String,
) {
    world.candidates.push(
        CandidateEntry::new()
            .with_task_id(task_id)
            .with_date(date)
            .with_start_time(start)
            .with_end_time(end),
    );
}

#[given(r#"a proposed entry "{task_id}" without a date from "{start}" to "{end}""#)]
fn proposed_entry_without_date(
    world: &mut ScheduleWorld,
    task_id: String,
    start: String,
    end: String,
) {
    world.candidates.push(
        CandidateEntry::new()
            .with_task_id(task_id)
            .with_start_time(start)
            .with_end_time(end),
    );
}

#[given("a generator that returns those entries in a code fence")]
fn generator_returns_entries(world: &mut ScheduleWorld) -> Result<(), eyre::Report> {
    let body = serde_json::to_string_pretty(&world.candidates)
        .wrap_err("serialize proposed entries")?;
    world.generator_text = Some(format!("Here is the plan:\n```json\n{body}\n```"));
    Ok(())
}
