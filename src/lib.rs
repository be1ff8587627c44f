//! Corkboard: kanban board backend with ordered lists and tasks.
//!
//! Boards contain lists ordered by `listOrder`; lists contain tasks ordered
//! by `taskOrder`. Every mutation records a sentence in an append-only user
//! action log within the same transaction as the change itself.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Entities, identifiers, and order positions
//! - **Ports**: The transactional store contract
//! - **Adapters**: In-memory and `PostgreSQL` store implementations
//! - **Services**: Ordering engine, move coordinator, and entity services
//!
//! # Modules
//!
//! - [`kanban`]: Boards, lists, tasks, and the action log
//! - [`api`]: Route facade with JSON bodies and `{message, status}` errors
//! - [`config`]: Database settings read from the environment

pub mod api;
pub mod config;
pub mod kanban;
