//! Diesel row models for kanban persistence.

use super::schema::{boards, lists, tasks, user_action_logs};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row of the `boards` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardRow {
    /// Board identifier.
    pub id: uuid::Uuid,
    /// Board title.
    pub title: String,
}

/// Row of the `lists` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ListRow {
    /// List identifier.
    pub id: uuid::Uuid,
    /// Owning board.
    pub board_id: uuid::Uuid,
    /// List title.
    pub title: String,
    /// One-based order within the board.
    pub list_order: i32,
}

/// Row of the `tasks` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning list.
    pub list_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// One-based order within the list.
    pub task_order: i32,
}

/// Row of the `user_action_logs` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = user_action_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActionLogRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Human-readable action sentence.
    pub action: String,
    /// When the action was recorded.
    pub created_at: DateTime<Utc>,
}
