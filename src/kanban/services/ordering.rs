//! Ordering engine for sibling sets: lists of a board and tasks of a list.
//!
//! New children are appended after the current maximum order value.
//! Reordering rewrites the order of every listed child from a caller-given
//! sequence and leaves unlisted children untouched.

use super::error::KanbanResult;
use crate::kanban::{
    domain::{BoardId, ListId, Position, TaskId},
    ports::{KanbanTransaction, StoreResult},
};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A parent scope whose children carry an order field.
pub trait SiblingScope {
    /// Identifier of the parent entity.
    type Parent: Copy + fmt::Display;
    /// Identifier of the ordered children.
    type Child: Copy + Eq + Hash + fmt::Display;

    /// Returns the identifiers of the parent's current children.
    ///
    /// # Errors
    ///
    /// Returns the store error when the scan fails.
    fn children(
        tx: &mut dyn KanbanTransaction,
        parent: Self::Parent,
    ) -> StoreResult<Vec<Self::Child>>;

    /// Returns the highest order value among the parent's children.
    ///
    /// # Errors
    ///
    /// Returns the store error when the aggregate query fails.
    fn max_position(
        tx: &mut dyn KanbanTransaction,
        parent: Self::Parent,
    ) -> StoreResult<Option<Position>>;

    /// Writes the order value of one child.
    ///
    /// # Errors
    ///
    /// Returns the store error when the write fails.
    fn write_position(
        tx: &mut dyn KanbanTransaction,
        child: Self::Child,
        position: Position,
    ) -> StoreResult<()>;
}

/// Lists ordered by `listOrder` within a board.
#[derive(Debug, Clone, Copy)]
pub struct ListSiblings;

impl SiblingScope for ListSiblings {
    type Parent = BoardId;
    type Child = ListId;

    fn children(tx: &mut dyn KanbanTransaction, parent: BoardId) -> StoreResult<Vec<ListId>> {
        Ok(tx
            .lists_for_board(parent)?
            .iter()
            .map(|list| list.id())
            .collect())
    }

    fn max_position(
        tx: &mut dyn KanbanTransaction,
        parent: BoardId,
    ) -> StoreResult<Option<Position>> {
        tx.max_list_position(parent)
    }

    fn write_position(
        tx: &mut dyn KanbanTransaction,
        child: ListId,
        position: Position,
    ) -> StoreResult<()> {
        tx.set_list_position(child, position)
    }
}

/// Tasks ordered by `taskOrder` within a list.
#[derive(Debug, Clone, Copy)]
pub struct TaskSiblings;

impl SiblingScope for TaskSiblings {
    type Parent = ListId;
    type Child = TaskId;

    fn children(tx: &mut dyn KanbanTransaction, parent: ListId) -> StoreResult<Vec<TaskId>> {
        Ok(tx
            .tasks_for_list(parent)?
            .iter()
            .map(|task| task.id())
            .collect())
    }

    fn max_position(
        tx: &mut dyn KanbanTransaction,
        parent: ListId,
    ) -> StoreResult<Option<Position>> {
        tx.max_task_position(parent)
    }

    fn write_position(
        tx: &mut dyn KanbanTransaction,
        child: TaskId,
        position: Position,
    ) -> StoreResult<()> {
        tx.set_task_position(child, position)
    }
}

/// Summary of one reorder call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReorderOutcome {
    written: usize,
    skipped: usize,
}

impl ReorderOutcome {
    /// Number of order values written.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Number of requested identifiers ignored because they do not belong
    /// to the parent.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Returns the order value for a child appended to `parent`.
///
/// This is `max + 1` over the current children, or [`Position::FIRST`] for
/// an empty parent. The value is computed on demand without locking, so two
/// concurrent creates may receive the same value.
///
/// # Errors
///
/// Returns [`super::KanbanError::Store`] when the aggregate query fails or
/// [`super::KanbanError::Domain`] when the next value overflows.
pub fn next_position<S: SiblingScope>(
    tx: &mut dyn KanbanTransaction,
    parent: S::Parent,
) -> KanbanResult<Position> {
    match S::max_position(tx, parent)? {
        Some(max) => Ok(max.next()?),
        None => Ok(Position::FIRST),
    }
}

/// Rewrites the order of `parent`'s children from `ordered`.
///
/// Identifiers are visited in sequence and each one belonging to `parent`
/// receives the next order value, starting at 1. Identifiers that do not
/// exist or belong to another parent are skipped without consuming a value.
/// Children absent from `ordered` keep their current order value, which may
/// now collide with a rewritten one.
///
/// # Errors
///
/// Returns [`super::KanbanError::Store`] when a read or write fails. The
/// caller's transaction is expected to roll back every write in that case.
pub fn reorder<S: SiblingScope>(
    tx: &mut dyn KanbanTransaction,
    parent: S::Parent,
    ordered: &[S::Child],
) -> KanbanResult<ReorderOutcome> {
    let members: HashSet<S::Child> = S::children(tx, parent)?.into_iter().collect();
    let mut outcome = ReorderOutcome::default();

    for &child in ordered {
        if !members.contains(&child) {
            tracing::debug!(%parent, %child, "skipping reorder id outside parent");
            outcome.skipped += 1;
            continue;
        }
        let position = Position::from_index(outcome.written)?;
        S::write_position(tx, child, position)?;
        outcome.written += 1;
    }

    Ok(outcome)
}
