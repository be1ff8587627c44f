//! Error types for kanban domain values.

use thiserror::Error;

/// Errors returned while constructing kanban domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KanbanDomainError {
    /// The order value is zero or does not fit the storage column.
    #[error("position {0} is out of range, expected 1..=2147483647")]
    PositionOutOfRange(u64),
}
