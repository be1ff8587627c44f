//! Then steps for task move BDD scenarios.

use super::world::{KanbanWorld, run_async, split_titles};
use corkboard::kanban::services::KanbanError;
use rstest_bdd_macros::then;

fn expect_layout(
    world: &KanbanWorld,
    list: &str,
    expected: Vec<(String, u32)>,
) -> Result<(), eyre::Report> {
    let actual = world.layout(list)?;
    if actual != expected {
        return Err(eyre::eyre!(
            "list '{list}' expected {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"list "{list}" is ordered "{titles}""#)]
fn list_is_ordered(world: &mut KanbanWorld, list: String, titles: String) -> Result<(), eyre::Report> {
    let expected = split_titles(&titles).into_iter().zip(1..).collect();
    expect_layout(world, &list, expected)
}

#[then(r#"list "{list}" is empty"#)]
fn list_is_empty(world: &mut KanbanWorld, list: String) -> Result<(), eyre::Report> {
    expect_layout(world, &list, Vec::new())
}

#[then(r#"list "{list}" has positions "{layout}""#)]
fn list_has_positions(
    world: &mut KanbanWorld,
    list: String,
    layout: String,
) -> Result<(), eyre::Report> {
    let expected = split_titles(&layout)
        .iter()
        .map(|entry| {
            let (title, position) = entry
                .split_once(':')
                .ok_or_else(|| eyre::eyre!("malformed layout entry '{entry}'"))?;
            Ok((title.trim().to_owned(), position.trim().parse::<u32>()?))
        })
        .collect::<Result<Vec<_>, eyre::Report>>()?;
    expect_layout(world, &list, expected)
}

#[then(r#"the action log ends with "{action}""#)]
fn action_log_ends_with(world: &mut KanbanWorld, action: String) -> Result<(), eyre::Report> {
    let entries = run_async(world.logs.entries())
        .map_err(|err| eyre::eyre!("reading action log failed: {err}"))?;
    let last = entries
        .last()
        .ok_or_else(|| eyre::eyre!("action log is empty"))?;
    if last.action() != action {
        return Err(eyre::eyre!(
            "expected last action '{action}', found '{}'",
            last.action()
        ));
    }
    Ok(())
}

#[then("the action log did not grow")]
fn action_log_did_not_grow(world: &mut KanbanWorld) -> Result<(), eyre::Report> {
    let length = world.log_length()?;
    if length != world.log_length_before_move {
        return Err(eyre::eyre!(
            "action log grew from {} to {length}",
            world.log_length_before_move
        ));
    }
    Ok(())
}

#[then("the move fails because the task was not found")]
fn move_fails_not_found(world: &KanbanWorld) -> Result<(), eyre::Report> {
    match &world.last_move {
        Some(Err(KanbanError::TaskNotFound(_))) => Ok(()),
        other => Err(eyre::eyre!("expected task not found, got {other:?}")),
    }
}

#[then("the move fails with a store error")]
fn move_fails_with_store_error(world: &KanbanWorld) -> Result<(), eyre::Report> {
    match &world.last_move {
        Some(Err(KanbanError::Store(_))) => Ok(()),
        other => Err(eyre::eyre!("expected store error, got {other:?}")),
    }
}
