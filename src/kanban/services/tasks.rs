//! Task service: list-scoped task management, reordering, and moves.

use super::{
    audit::ActionRecorder,
    error::{KanbanError, KanbanResult},
    move_task::{self, MoveOutcome, MoveTaskRequest},
    ordering::{self, ReorderOutcome, TaskSiblings},
};
use crate::kanban::{
    domain::{ListId, Task, TaskId},
    ports::KanbanStore,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    list_id: ListId,
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request for a task without a description.
    #[must_use]
    pub fn new(list_id: ListId, title: impl Into<String>) -> Self {
        Self {
            list_id,
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Task management service.
#[derive(Clone)]
pub struct TaskService<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    recorder: ActionRecorder<C>,
}

impl<S, C> TaskService<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            recorder: ActionRecorder::new(clock),
        }
    }

    /// Returns the tasks of a list sorted by order.
    ///
    /// An unknown list yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::Store`] when the read fails.
    pub async fn tasks_for_list(&self, list_id: ListId) -> KanbanResult<Vec<Task>> {
        self.store
            .transaction(move |tx| Ok(tx.tasks_for_list(list_id)?))
            .await
    }

    /// Creates a task at the end of a list.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::ListNotFound`] when the list does not exist,
    /// or the store error of a failed write.
    pub async fn create_task(&self, request: CreateTaskRequest) -> KanbanResult<Task> {
        let CreateTaskRequest {
            list_id,
            title,
            description,
        } = request;
        let recorder = self.recorder.clone();
        self.store
            .transaction(move |tx| {
                tx.find_list(list_id)?
                    .ok_or(KanbanError::ListNotFound(list_id))?;
                let position = ordering::next_position::<TaskSiblings>(tx, list_id)?;
                let task = Task::new(list_id, title, description, position);
                tx.insert_task(&task)?;
                recorder.record_in(tx, format!("User created the task {}", task.title()))?;
                Ok(task)
            })
            .await
            .inspect(|task| info!(task_id = %task.id(), %list_id, "task created"))
            .inspect_err(|err| warn!(%list_id, error = %err, "task creation failed"))
    }

    /// Replaces a task's title and, when given, its description.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::TaskNotFound`] when the task does not exist,
    /// or the store error of a failed write.
    pub async fn update_task(
        &self,
        id: TaskId,
        title: impl Into<String>,
        description: Option<String>,
    ) -> KanbanResult<Task> {
        let recorder = self.recorder.clone();
        let new_title = title.into();
        self.store
            .transaction(move |tx| {
                let mut task = tx.find_task(id)?.ok_or(KanbanError::TaskNotFound(id))?;
                task.update_details(new_title, description);
                tx.update_task(&task)?;
                recorder.record_in(tx, format!("User updated the task {}", task.title()))?;
                Ok(task)
            })
            .await
            .inspect(|_| info!(task_id = %id, "task updated"))
            .inspect_err(|err| warn!(task_id = %id, error = %err, "task update failed"))
    }

    /// Deletes a task.
    ///
    /// Sibling tasks keep their order values.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::TaskNotFound`] when the task does not exist,
    /// or the store error of a failed write.
    pub async fn delete_task(&self, id: TaskId) -> KanbanResult<Task> {
        let recorder = self.recorder.clone();
        self.store
            .transaction(move |tx| {
                let task = tx.find_task(id)?.ok_or(KanbanError::TaskNotFound(id))?;
                tx.delete_task(id)?;
                recorder.record_in(tx, format!("User deleted the task {}", task.title()))?;
                Ok(task)
            })
            .await
            .inspect(|_| info!(task_id = %id, "task deleted"))
            .inspect_err(|err| warn!(task_id = %id, error = %err, "task deletion failed"))
    }

    /// Rewrites the order of a list's tasks from `ordered_ids`.
    ///
    /// Identifiers that are unknown or belong to another list are ignored.
    /// Tasks missing from `ordered_ids` keep their order values.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::Store`] when a read or write fails; no order
    /// value changes in that case.
    pub async fn reorder_tasks(
        &self,
        list_id: ListId,
        ordered_ids: Vec<TaskId>,
    ) -> KanbanResult<ReorderOutcome> {
        let outcome = self
            .store
            .transaction(move |tx| ordering::reorder::<TaskSiblings>(tx, list_id, &ordered_ids))
            .await
            .inspect_err(|err| warn!(%list_id, error = %err, "task reorder failed"))?;
        debug!(
            %list_id,
            written = outcome.written(),
            skipped = outcome.skipped(),
            "tasks reordered"
        );
        Ok(outcome)
    }

    /// Moves a task to another list, or within its list, in one transaction.
    ///
    /// See [`move_task::move_task`] for the renumbering rules.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::TaskNotFound`] or [`KanbanError::ListNotFound`]
    /// for missing rows, or the store error of a failed read or write. No
    /// write survives a failed move.
    pub async fn move_task(&self, request: MoveTaskRequest) -> KanbanResult<MoveOutcome> {
        let recorder = self.recorder.clone();
        self.store
            .transaction(move |tx| move_task::move_task(tx, &recorder, request))
            .await
            .inspect(|_| {
                info!(
                    task_id = %request.task_id(),
                    from = %request.from_list_id(),
                    to = %request.to_list_id(),
                    "task moved"
                );
            })
            .inspect_err(|err| {
                warn!(task_id = %request.task_id(), error = %err, "task move failed");
            })
    }
}
