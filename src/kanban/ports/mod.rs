//! Port contracts for kanban persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by kanban services.

pub mod store;

pub use store::{KanbanStore, KanbanTransaction, StoreError, StoreResult};

#[cfg(test)]
pub use store::MockKanbanTransaction;
