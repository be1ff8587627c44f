//! Service layer for the kanban bounded context.
//!
//! Each service call runs in exactly one store transaction. Mutations append
//! their audit entry inside that transaction, so an entry exists if and only
//! if the change it describes was committed.

mod audit;
mod boards;
mod error;
mod lists;
pub mod move_task;
pub mod ordering;
mod tasks;

pub use audit::{ActionLogService, ActionRecorder};
pub use boards::{BoardDetails, BoardService};
pub use error::{KanbanError, KanbanResult};
pub use lists::{ListService, ListWithTasks};
pub use move_task::{MoveOutcome, MoveTaskRequest};
pub use ordering::{ListSiblings, ReorderOutcome, SiblingScope, TaskSiblings};
pub use tasks::{CreateTaskRequest, TaskService};
