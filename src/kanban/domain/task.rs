//! Task entity: an item within a list.

use super::{ListId, Position, TaskId};
use serde::{Deserialize, Serialize};

/// A task belonging to a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    list_id: ListId,
    title: String,
    description: Option<String>,
    position: Position,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning list.
    pub list_id: ListId,
    /// Persisted title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Persisted `taskOrder` value.
    pub position: Position,
}

impl Task {
    /// Creates a new task at the given position of a list.
    #[must_use]
    pub fn new(
        list_id: ListId,
        title: impl Into<String>,
        description: Option<String>,
        position: Position,
    ) -> Self {
        Self {
            id: TaskId::new(),
            list_id,
            title: title.into(),
            description,
            position,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            list_id: data.list_id,
            title: data.title,
            description: data.description,
            position: data.position,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning list identifier.
    #[must_use]
    pub const fn list_id(&self) -> ListId {
        self.list_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the order of this task within its list.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Replaces the title and, when given, the description.
    ///
    /// A `None` description leaves the current description untouched.
    pub fn update_details(&mut self, title: impl Into<String>, description: Option<String>) {
        self.title = title.into();
        if description.is_some() {
            self.description = description;
        }
    }

    /// Places the task in a list at the given position.
    pub const fn relocate(&mut self, list_id: ListId, position: Position) {
        self.list_id = list_id;
        self.position = position;
    }
}
