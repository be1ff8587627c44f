//! Domain model for boards, lists, tasks, and the user action log.
//!
//! Entities are plain data referring to their parents by identifier. Order
//! fields use [`Position`]; the rules that rewrite them live in the service
//! layer.

mod action_log;
mod board;
mod error;
mod ids;
mod list;
mod position;
mod task;

pub use action_log::ActionLogEntry;
pub use board::Board;
pub use error::KanbanDomainError;
pub use ids::{ActionLogId, BoardId, ListId, TaskId};
pub use list::{List, PersistedListData};
pub use position::Position;
pub use task::{PersistedTaskData, Task};
