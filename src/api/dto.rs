//! JSON request and response bodies.
//!
//! Field names follow the camelCase wire format (`boardId`, `listOrder`,
//! `orderedTaskIds`, ...).

use crate::kanban::{
    domain::{ActionLogEntry, Board, BoardId, List, ListId, Task, TaskId},
    services::{BoardDetails, ListWithTasks, MoveOutcome},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /boards` and `PUT /boards/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTitleRequest {
    /// New board title.
    pub title: String,
}

/// Body of `POST /lists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    /// List title.
    pub title: String,
    /// Board receiving the list.
    pub board_id: BoardId,
}

/// Body of `PUT /lists/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateListRequest {
    /// New list title.
    pub title: String,
}

/// Body of `POST /lists/:boardId/reorder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderListsRequest {
    /// List identifiers in their new order.
    pub ordered_list_ids: Vec<ListId>,
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// List receiving the task.
    pub list_id: ListId,
}

/// Body of `PUT /tasks/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskBody {
    /// New task title.
    pub title: String,
    /// New description; the current one is kept when absent.
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /tasks/reorder/:listId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderTasksRequest {
    /// Task identifiers in their new order.
    pub ordered_task_ids: Vec<TaskId>,
}

/// Body of `PUT /tasks/move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskBody {
    /// Task being moved.
    pub task_id: TaskId,
    /// List the task currently belongs to.
    pub from_list_id: ListId,
    /// List receiving the task.
    pub to_list_id: ListId,
    /// Task the moved task is placed before; appended when absent.
    #[serde(default)]
    pub target_task_id: Option<TaskId>,
}

/// `{message}` confirmation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Creates a confirmation body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Board summary `{id, title}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDto {
    /// Board identifier.
    pub id: BoardId,
    /// Board title.
    pub title: String,
}

impl From<Board> for BoardDto {
    fn from(board: Board) -> Self {
        Self {
            id: board.id(),
            title: board.title().to_owned(),
        }
    }
}

/// List row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDto {
    /// List identifier.
    pub id: ListId,
    /// List title.
    pub title: String,
    /// Owning board.
    pub board_id: BoardId,
    /// Sort key within the board.
    pub list_order: u32,
}

impl From<List> for ListDto {
    fn from(list: List) -> Self {
        Self {
            id: list.id(),
            title: list.title().to_owned(),
            board_id: list.board_id(),
            list_order: list.position().value(),
        }
    }
}

/// Task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional description, `null` when unset.
    pub description: Option<String>,
    /// Owning list.
    pub list_id: ListId,
    /// Sort key within the list.
    pub task_order: u32,
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            list_id: task.list_id(),
            task_order: task.position().value(),
        }
    }
}

/// List row with its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWithTasksDto {
    /// List fields.
    #[serde(flatten)]
    pub list: ListDto,
    /// Tasks sorted by `taskOrder`.
    pub tasks: Vec<TaskDto>,
}

impl From<ListWithTasks> for ListWithTasksDto {
    fn from(view: ListWithTasks) -> Self {
        let (list, tasks) = view.into_parts();
        Self {
            list: list.into(),
            tasks: tasks.into_iter().map(TaskDto::from).collect(),
        }
    }
}

/// Board with its lists and tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDetailsDto {
    /// Board fields.
    #[serde(flatten)]
    pub board: BoardDto,
    /// Lists sorted by `listOrder`.
    pub lists: Vec<ListWithTasksDto>,
}

impl From<BoardDetails> for BoardDetailsDto {
    fn from(details: BoardDetails) -> Self {
        let (board, lists) = details.into_parts();
        Self {
            board: board.into(),
            lists: lists.into_iter().map(ListWithTasksDto::from).collect(),
        }
    }
}

/// Response of `PUT /tasks/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Post-move tasks of every touched list, keyed by list identifier.
    pub updated_lists: BTreeMap<ListId, Vec<TaskDto>>,
}

impl MoveTaskResponse {
    /// Builds the response from a completed move.
    #[must_use]
    pub fn new(message: impl Into<String>, outcome: &MoveOutcome) -> Self {
        let updated_lists = outcome
            .updated_lists()
            .into_iter()
            .map(|(list_id, tasks)| {
                (
                    list_id,
                    tasks.iter().cloned().map(TaskDto::from).collect(),
                )
            })
            .collect();
        Self {
            message: message.into(),
            updated_lists,
        }
    }
}

/// Action log row `{action, date}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLogDto {
    /// Human-readable action sentence.
    pub action: String,
    /// When the action was recorded.
    pub date: DateTime<Utc>,
}

impl From<ActionLogEntry> for ActionLogDto {
    fn from(entry: ActionLogEntry) -> Self {
        Self {
            action: entry.action().to_owned(),
            date: entry.created_at(),
        }
    }
}
