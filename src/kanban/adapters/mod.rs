//! Store adapters for the kanban module.
//!
//! This module provides concrete implementations of the [`KanbanStore`]
//! port:
//!
//! - [`memory::InMemoryKanbanStore`]: copy-on-commit in-memory storage for
//!   tests and embedding
//! - [`postgres::PostgresKanbanStore`]: `PostgreSQL` persistence using Diesel
//!
//! [`KanbanStore`]: crate::kanban::ports::KanbanStore

pub mod memory;
pub mod postgres;
