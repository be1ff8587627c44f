//! List service: board-scoped list management and list reordering.

use super::{
    audit::ActionRecorder,
    error::{KanbanError, KanbanResult},
    ordering::{self, ListSiblings, ReorderOutcome},
};
use crate::kanban::{
    domain::{BoardId, List, ListId, Task},
    ports::{KanbanStore, KanbanTransaction, StoreResult},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A list together with its tasks sorted by order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWithTasks {
    list: List,
    tasks: Vec<Task>,
}

impl ListWithTasks {
    /// Returns the list.
    #[must_use]
    pub const fn list(&self) -> &List {
        &self.list
    }

    /// Returns the list's tasks sorted by order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Splits the view into its parts.
    #[must_use]
    pub fn into_parts(self) -> (List, Vec<Task>) {
        (self.list, self.tasks)
    }
}

/// Loads the lists of a board with their tasks, both sorted by order.
pub(crate) fn load_lists_with_tasks(
    tx: &mut dyn KanbanTransaction,
    board_id: BoardId,
) -> StoreResult<Vec<ListWithTasks>> {
    let lists = tx.lists_for_board(board_id)?;
    let mut views = Vec::with_capacity(lists.len());
    for list in lists {
        let tasks = tx.tasks_for_list(list.id())?;
        views.push(ListWithTasks { list, tasks });
    }
    Ok(views)
}

/// List management service.
#[derive(Clone)]
pub struct ListService<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    recorder: ActionRecorder<C>,
}

impl<S, C> ListService<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new list service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            recorder: ActionRecorder::new(clock),
        }
    }

    /// Returns the lists of a board with their tasks.
    ///
    /// An unknown board yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::Store`] when the read fails.
    pub async fn lists_for_board(&self, board_id: BoardId) -> KanbanResult<Vec<ListWithTasks>> {
        self.store
            .transaction(move |tx| Ok(load_lists_with_tasks(tx, board_id)?))
            .await
    }

    /// Creates a list at the end of a board.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::BoardNotFound`] when the board does not exist,
    /// or the store error of a failed write.
    pub async fn create_list(
        &self,
        board_id: BoardId,
        title: impl Into<String>,
    ) -> KanbanResult<List> {
        let recorder = self.recorder.clone();
        let new_title = title.into();
        self.store
            .transaction(move |tx| {
                tx.find_board(board_id)?
                    .ok_or(KanbanError::BoardNotFound(board_id))?;
                let position = ordering::next_position::<ListSiblings>(tx, board_id)?;
                let list = List::new(board_id, new_title, position);
                tx.insert_list(&list)?;
                recorder.record_in(tx, format!("User created the list {}", list.title()))?;
                Ok(list)
            })
            .await
            .inspect(|list| info!(list_id = %list.id(), %board_id, "list created"))
            .inspect_err(|err| warn!(%board_id, error = %err, "list creation failed"))
    }

    /// Renames a list.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::ListNotFound`] when the list does not exist,
    /// or the store error of a failed write.
    pub async fn update_list(&self, id: ListId, title: impl Into<String>) -> KanbanResult<List> {
        let recorder = self.recorder.clone();
        let new_title = title.into();
        self.store
            .transaction(move |tx| {
                let mut list = tx.find_list(id)?.ok_or(KanbanError::ListNotFound(id))?;
                list.rename(new_title);
                tx.update_list(&list)?;
                recorder.record_in(tx, format!("User renamed the list to {}", list.title()))?;
                Ok(list)
            })
            .await
            .inspect(|_| info!(list_id = %id, "list renamed"))
            .inspect_err(|err| warn!(list_id = %id, error = %err, "list rename failed"))
    }

    /// Deletes a list and its tasks.
    ///
    /// Sibling lists keep their order values.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::ListNotFound`] when the list does not exist,
    /// or the store error of a failed write.
    pub async fn delete_list(&self, id: ListId) -> KanbanResult<List> {
        let recorder = self.recorder.clone();
        self.store
            .transaction(move |tx| {
                let list = tx.find_list(id)?.ok_or(KanbanError::ListNotFound(id))?;
                tx.delete_list(id)?;
                recorder.record_in(tx, format!("User deleted the list {}", list.title()))?;
                Ok(list)
            })
            .await
            .inspect(|_| info!(list_id = %id, "list deleted"))
            .inspect_err(|err| warn!(list_id = %id, error = %err, "list deletion failed"))
    }

    /// Rewrites the order of a board's lists from `ordered_ids`.
    ///
    /// Identifiers that are unknown or belong to another board are ignored.
    /// Lists missing from `ordered_ids` keep their order values.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::Store`] when a read or write fails; no order
    /// value changes in that case.
    pub async fn reorder_lists(
        &self,
        board_id: BoardId,
        ordered_ids: Vec<ListId>,
    ) -> KanbanResult<ReorderOutcome> {
        let outcome = self
            .store
            .transaction(move |tx| ordering::reorder::<ListSiblings>(tx, board_id, &ordered_ids))
            .await
            .inspect_err(|err| warn!(%board_id, error = %err, "list reorder failed"))?;
        debug!(
            %board_id,
            written = outcome.written(),
            skipped = outcome.skipped(),
            "lists reordered"
        );
        Ok(outcome)
    }
}
