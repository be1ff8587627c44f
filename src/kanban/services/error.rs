//! Service-level errors for kanban operations.

use crate::kanban::{
    domain::{BoardId, KanbanDomainError, ListId, TaskId},
    ports::StoreError,
};
use thiserror::Error;

/// Errors surfaced by kanban services.
///
/// The not-found variants carry fixed, entity-specific messages that the
/// HTTP boundary forwards verbatim.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// The board does not exist.
    #[error("Board not found")]
    BoardNotFound(BoardId),

    /// The list does not exist.
    #[error("List not found")]
    ListNotFound(ListId),

    /// The task does not exist.
    #[error("Task not found")]
    TaskNotFound(TaskId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] KanbanDomainError),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl KanbanError {
    /// Returns `true` for the board, list, and task not-found variants.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound(_) | Self::ListNotFound(_) | Self::TaskNotFound(_)
        )
    }
}

/// Result type for kanban service operations.
pub type KanbanResult<T> = Result<T, KanbanError>;
