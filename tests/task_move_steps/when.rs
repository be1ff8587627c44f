//! When steps for task move BDD scenarios.

use super::world::{KanbanWorld, run_async, split_titles};
use corkboard::kanban::{
    domain::{ListId, TaskId},
    services::MoveTaskRequest,
};
use rstest_bdd_macros::when;

fn attempt_move(world: &mut KanbanWorld, request: MoveTaskRequest) -> Result<(), eyre::Report> {
    world.log_length_before_move = world.log_length()?;
    world.last_move = Some(run_async(world.tasks.move_task(request)));
    Ok(())
}

fn route(world: &KanbanWorld, from: &str, to: &str) -> Result<(ListId, ListId), eyre::Report> {
    Ok((world.list(from)?.id(), world.list(to)?.id()))
}

#[when(r#"task "{task}" is moved from "{from}" to the end of "{to}""#)]
fn move_to_end(
    world: &mut KanbanWorld,
    task: String,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?.id();
    let (from_id, to_id) = route(world, &from, &to)?;
    attempt_move(world, MoveTaskRequest::new(task_id, from_id, to_id))
}

#[when(r#"task "{task}" is moved from "{from}" to "{to}" ahead of "{target}""#)]
fn move_ahead_of(
    world: &mut KanbanWorld,
    task: String,
    from: String,
    to: String,
    target: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?.id();
    let target_id = world.task(&target)?.id();
    let (from_id, to_id) = route(world, &from, &to)?;
    attempt_move(
        world,
        MoveTaskRequest::new(task_id, from_id, to_id).before(target_id),
    )
}

#[when(r#"an unknown task is moved from "{from}" to the end of "{to}""#)]
fn move_unknown_task(world: &mut KanbanWorld, from: String, to: String) -> Result<(), eyre::Report> {
    let (from_id, to_id) = route(world, &from, &to)?;
    attempt_move(world, MoveTaskRequest::new(TaskId::new(), from_id, to_id))
}

#[when(r#"list "{list}" is reordered as "{titles}""#)]
fn reorder_list(world: &mut KanbanWorld, list: String, titles: String) -> Result<(), eyre::Report> {
    let list_id = world.list(&list)?.id();
    let ordered = split_titles(&titles)
        .iter()
        .map(|title| world.task(title).map(|task| task.id()))
        .collect::<Result<Vec<_>, _>>()?;
    run_async(world.tasks.reorder_tasks(list_id, ordered))
        .map_err(|err| eyre::eyre!("reorder failed: {err}"))?;
    Ok(())
}
