//! When steps for schedule repair BDD scenarios.

use super::world::{ScheduleWorld, parse_date, run_async};
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use std::sync::Arc;
use taskplan::schedule::{
    adapters::memory::StaticScheduleProposer,
    ports::{ProposalRequest, TaskSummary},
    services::{RepairContext, ScheduleAssistService},
};

#[when(r#"the proposal is repaired with fallback date "{date}""#)]
fn repair_proposal(world: &mut ScheduleWorld, date: String) -> Result<(), eyre::Report> {
    let context = RepairContext::new(parse_date(&date)?);
    let outcome = world.engine.repair(&world.candidates, &context);
    world.outcome = Some(Ok(outcome));
    Ok(())
}

#[when(r#"the assistant plans a schedule starting on "{date}""#)]
fn assistant_plans(world: &mut ScheduleWorld, date: String) -> Result<(), eyre::Report> {
    let text = world
        .generator_text
        .clone()
        .ok_or_else(|| eyre::eyre!("missing generator output in scenario world"))?;
    let service = ScheduleAssistService::new(
        Arc::new(StaticScheduleProposer::new(text)),
        Arc::new(DefaultClock),
        world.engine.constraints().clone(),
    );
    let tasks = world.candidates.iter().filter_map(|candidate| {
        candidate
            .task_id()
            .map(|id| TaskSummary::new(id, candidate.task_title().unwrap_or(id)))
    });
    let request = ProposalRequest::new(tasks).starting_on(parse_date(&date)?);

    world.outcome = Some(run_async(service.plan(&request, Vec::new())));
    Ok(())
}
