//! `PostgreSQL` adapter for kanban persistence.

mod blocking_helpers;
mod models;
mod schema;
mod store;

pub use blocking_helpers::KanbanPgPool;
pub use store::PostgresKanbanStore;
