//! Move coordinator: relocates one task between lists.

use super::{
    audit::ActionRecorder,
    error::{KanbanError, KanbanResult},
};
use crate::kanban::{
    domain::{ListId, Position, Task, TaskId},
    ports::KanbanTransaction,
};
use mockable::Clock;

/// Request payload for moving a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTaskRequest {
    task_id: TaskId,
    from_list_id: ListId,
    to_list_id: ListId,
    target_task_id: Option<TaskId>,
}

impl MoveTaskRequest {
    /// Creates a request appending the task to the end of `to_list_id`.
    #[must_use]
    pub const fn new(task_id: TaskId, from_list_id: ListId, to_list_id: ListId) -> Self {
        Self {
            task_id,
            from_list_id,
            to_list_id,
            target_task_id: None,
        }
    }

    /// Places the task immediately before `target_task_id` instead.
    #[must_use]
    pub const fn before(mut self, target_task_id: TaskId) -> Self {
        self.target_task_id = Some(target_task_id);
        self
    }

    /// Sets or clears the target task.
    #[must_use]
    pub const fn with_target(mut self, target_task_id: Option<TaskId>) -> Self {
        self.target_task_id = target_task_id;
        self
    }

    /// Returns the task being moved.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the list the task leaves.
    #[must_use]
    pub const fn from_list_id(&self) -> ListId {
        self.from_list_id
    }

    /// Returns the list the task joins.
    #[must_use]
    pub const fn to_list_id(&self) -> ListId {
        self.to_list_id
    }

    /// Returns the task the moved task is placed before, if any.
    #[must_use]
    pub const fn target_task_id(&self) -> Option<TaskId> {
        self.target_task_id
    }
}

/// Post-move state of both lists touched by a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    source_list_id: ListId,
    source: Vec<Task>,
    destination_list_id: ListId,
    destination: Vec<Task>,
}

impl MoveOutcome {
    /// Returns the source list identifier.
    #[must_use]
    pub const fn source_list_id(&self) -> ListId {
        self.source_list_id
    }

    /// Returns the source list's tasks sorted by order.
    #[must_use]
    pub fn source(&self) -> &[Task] {
        &self.source
    }

    /// Returns the destination list identifier.
    #[must_use]
    pub const fn destination_list_id(&self) -> ListId {
        self.destination_list_id
    }

    /// Returns the destination list's tasks sorted by order.
    #[must_use]
    pub fn destination(&self) -> &[Task] {
        &self.destination
    }

    /// Returns `(list id, tasks)` for every distinct list touched.
    ///
    /// A move within one list yields a single entry.
    #[must_use]
    pub fn updated_lists(&self) -> Vec<(ListId, &[Task])> {
        if self.source_list_id == self.destination_list_id {
            return vec![(self.destination_list_id, self.destination())];
        }
        vec![
            (self.source_list_id, self.source()),
            (self.destination_list_id, self.destination()),
        ]
    }
}

/// Moves a task inside the caller's transaction.
///
/// The source list is renumbered `1..N` without the moving task. The
/// destination list, also without the moving task, is renumbered around a
/// slot reserved in front of the target task, or at the end when the target
/// is absent or not in the destination. One audit entry is appended. Every
/// remaining row of both lists is rewritten, not only the shifted ones.
///
/// # Errors
///
/// Returns [`KanbanError::TaskNotFound`] when the task does not exist,
/// [`KanbanError::ListNotFound`] when the destination list does not exist,
/// or the store error of any failed read or write.
pub fn move_task<C>(
    tx: &mut dyn KanbanTransaction,
    recorder: &ActionRecorder<C>,
    request: MoveTaskRequest,
) -> KanbanResult<MoveOutcome>
where
    C: Clock + Send + Sync,
{
    let task_id = request.task_id();
    let mut task = tx
        .find_task(task_id)?
        .ok_or(KanbanError::TaskNotFound(task_id))?;
    let destination_list = tx
        .find_list(request.to_list_id())?
        .ok_or(KanbanError::ListNotFound(request.to_list_id()))?;

    close_gap(tx, request.from_list_id(), task_id)?;

    let snapshot: Vec<Task> = tx
        .tasks_for_list(request.to_list_id())?
        .into_iter()
        .filter(|member| member.id() != task_id)
        .collect();
    let target_index = request
        .target_task_id()
        .and_then(|target| snapshot.iter().position(|member| member.id() == target))
        .unwrap_or(snapshot.len());

    task.relocate(request.to_list_id(), Position::from_index(target_index)?);
    tx.update_task(&task)?;

    for (index, member) in snapshot.iter().enumerate() {
        let slot = if index < target_index { index } else { index + 1 };
        tx.set_task_position(member.id(), Position::from_index(slot)?)?;
    }

    recorder.record_in(
        tx,
        format!(
            "User moved the task {} to the list {}",
            task.title(),
            destination_list.title()
        ),
    )?;

    Ok(MoveOutcome {
        source_list_id: request.from_list_id(),
        source: tx.tasks_for_list(request.from_list_id())?,
        destination_list_id: request.to_list_id(),
        destination: tx.tasks_for_list(request.to_list_id())?,
    })
}

/// Renumbers a list `1..N` in its current order, leaving out `leaving`.
fn close_gap(
    tx: &mut dyn KanbanTransaction,
    list_id: ListId,
    leaving: TaskId,
) -> KanbanResult<()> {
    let remaining = tx
        .tasks_for_list(list_id)?
        .into_iter()
        .filter(|member| member.id() != leaving);
    for (index, member) in remaining.enumerate() {
        tx.set_task_position(member.id(), Position::from_index(index)?)?;
    }
    Ok(())
}
