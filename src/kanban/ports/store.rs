//! Transactional store port for boards, lists, tasks, and action log entries.
//!
//! A [`KanbanStore`] hands out one [`KanbanTransaction`] per unit of work.
//! Every write issued through the handle commits together when the work
//! returns `Ok` and is discarded when it returns `Err`.

use crate::kanban::domain::{
    ActionLogEntry, Board, BoardId, List, ListId, Position, Task, TaskId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store capable of running atomic units of work.
#[async_trait]
pub trait KanbanStore: Send + Sync {
    /// Runs `work` inside one transaction.
    ///
    /// The transaction commits when `work` returns `Ok`. When `work` returns
    /// `Err`, every write it issued is rolled back and the error is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `work`, or a [`StoreError`] converted
    /// into `E` when the transaction itself cannot be opened or committed.
    async fn transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn KanbanTransaction) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<StoreError> + Send + 'static;
}

/// Operations available inside a store transaction.
///
/// Scans over a parent return children sorted by their order field
/// ascending. Ties are broken deterministically by the adapter.
#[cfg_attr(test, mockall::automock)]
pub trait KanbanTransaction {
    /// Returns every board in creation order.
    fn boards(&mut self) -> StoreResult<Vec<Board>>;

    /// Finds a board by identifier.
    fn find_board(&mut self, id: BoardId) -> StoreResult<Option<Board>>;

    /// Stores a new board.
    fn insert_board(&mut self, board: &Board) -> StoreResult<()>;

    /// Persists a changed board title.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] when the board does not exist.
    fn update_board(&mut self, board: &Board) -> StoreResult<()>;

    /// Deletes a board together with its lists and their tasks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] when the board does not exist.
    fn delete_board(&mut self, id: BoardId) -> StoreResult<()>;

    /// Finds a list by identifier.
    fn find_list(&mut self, id: ListId) -> StoreResult<Option<List>>;

    /// Returns the lists of a board sorted by `listOrder`.
    fn lists_for_board(&mut self, board_id: BoardId) -> StoreResult<Vec<List>>;

    /// Returns the highest `listOrder` of a board, or `None` when it has no
    /// lists.
    fn max_list_position(&mut self, board_id: BoardId) -> StoreResult<Option<Position>>;

    /// Stores a new list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConstraintViolation`] when the board does not
    /// exist.
    fn insert_list(&mut self, list: &List) -> StoreResult<()>;

    /// Persists a changed list title.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] when the list does not exist.
    fn update_list(&mut self, list: &List) -> StoreResult<()>;

    /// Writes the `listOrder` of one list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] when the list does not exist.
    fn set_list_position(&mut self, id: ListId, position: Position) -> StoreResult<()>;

    /// Deletes a list together with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] when the list does not exist.
    fn delete_list(&mut self, id: ListId) -> StoreResult<()>;

    /// Finds a task by identifier.
    fn find_task(&mut self, id: TaskId) -> StoreResult<Option<Task>>;

    /// Returns the tasks of a list sorted by `taskOrder`.
    fn tasks_for_list(&mut self, list_id: ListId) -> StoreResult<Vec<Task>>;

    /// Returns the highest `taskOrder` of a list, or `None` when it has no
    /// tasks.
    fn max_task_position(&mut self, list_id: ListId) -> StoreResult<Option<Position>>;

    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConstraintViolation`] when the list does not
    /// exist.
    fn insert_task(&mut self, task: &Task) -> StoreResult<()>;

    /// Persists every field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] when the task does not exist or
    /// [`StoreError::ConstraintViolation`] when its list does not exist.
    fn update_task(&mut self, task: &Task) -> StoreResult<()>;

    /// Writes the `taskOrder` of one task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] when the task does not exist.
    fn set_task_position(&mut self, id: TaskId, position: Position) -> StoreResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] when the task does not exist.
    fn delete_task(&mut self, id: TaskId) -> StoreResult<()>;

    /// Appends an entry to the user action log.
    fn append_action(&mut self, entry: &ActionLogEntry) -> StoreResult<()>;

    /// Returns the action log, oldest entry first.
    fn action_log(&mut self) -> StoreResult<Vec<ActionLogEntry>>;
}

/// Errors returned by store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A write addressed a row that does not exist.
    #[error("{table} row not found: {id}")]
    RowNotFound {
        /// Table the write targeted.
        table: &'static str,
        /// Identifier of the missing row.
        id: uuid::Uuid,
    },

    /// A write would break a relational constraint such as a foreign key.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Builds a [`StoreError::RowNotFound`] for the given table.
    pub fn row_not_found(table: &'static str, id: impl AsRef<uuid::Uuid>) -> Self {
        Self::RowNotFound {
            table,
            id: *id.as_ref(),
        }
    }

    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
