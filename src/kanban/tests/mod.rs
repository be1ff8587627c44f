//! Unit tests for the kanban bounded context.
