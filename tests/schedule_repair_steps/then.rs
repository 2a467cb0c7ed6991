//! Then steps for schedule repair BDD scenarios.

use super::world::{ScheduleWorld, parse_date};
use rstest_bdd_macros::then;

#[then(r#"entry "{task_id}" is scheduled on "{date}" from "{start}" to "{end}""#)]
fn entry_is_scheduled(
    world: &ScheduleWorld,
    task_id: String,
    date: String,
    start: String,
    end: String,
) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    let entry = outcome
        .accepted()
        .iter()
        .find(|entry| entry.task_id() == Some(task_id.as_str()))
        .ok_or_else(|| eyre::eyre!("entry {task_id} was not accepted: {outcome:?}"))?;

    let expected_date = parse_date(&date)?;
    if entry.date() != expected_date {
        return Err(eyre::eyre!(
            "expected {task_id} on {expected_date}, found {}",
            entry.date()
        ));
    }
    let (actual_start, actual_end) = (entry.start_time().to_string(), entry.end_time().to_string());
    if actual_start != start || actual_end != end {
        return Err(eyre::eyre!(
            "expected {task_id} from {start} to {end}, found {actual_start} to {actual_end}"
        ));
    }
    Ok(())
}

#[then(r#"entry "{task_id}" is rejected"#)]
fn entry_is_rejected(world: &ScheduleWorld, task_id: String) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    let rejected = outcome
        .rejected()
        .iter()
        .any(|rejection| rejection.candidate().task_id() == Some(task_id.as_str()));
    let accepted = outcome
        .accepted()
        .iter()
        .any(|entry| entry.task_id() == Some(task_id.as_str()));
    if !rejected || accepted {
        return Err(eyre::eyre!(
            "expected {task_id} to be rejected only, got {outcome:?}"
        ));
    }
    Ok(())
}

#[then("no entries are rejected")]
fn no_entries_rejected(world: &ScheduleWorld) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    if !outcome.is_fully_accepted() {
        return Err(eyre::eyre!(
            "expected no rejections, got {:?}",
            outcome.rejected()
        ));
    }
    Ok(())
}

#[then("every accepted entry satisfies the constraints")]
fn accepted_entries_are_legal(world: &ScheduleWorld) -> Result<(), eyre::Report> {
    let constraints = world.engine.constraints();
    for entry in world.outcome()?.accepted() {
        entry
            .placement()
            .check(constraints)
            .map_err(|err| eyre::eyre!("accepted entry violates constraints: {err}"))?;
    }
    Ok(())
}
