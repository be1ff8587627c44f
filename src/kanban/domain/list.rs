//! List entity: an ordered column of tasks within a board.

use super::{BoardId, ListId, Position};
use serde::{Deserialize, Serialize};

/// A list belonging to a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    id: ListId,
    board_id: BoardId,
    title: String,
    position: Position,
}

/// Parameter object for reconstructing a persisted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedListData {
    /// Persisted list identifier.
    pub id: ListId,
    /// Owning board.
    pub board_id: BoardId,
    /// Persisted title.
    pub title: String,
    /// Persisted `listOrder` value.
    pub position: Position,
}

impl List {
    /// Creates a new list at the given position of a board.
    #[must_use]
    pub fn new(board_id: BoardId, title: impl Into<String>, position: Position) -> Self {
        Self {
            id: ListId::new(),
            board_id,
            title: title.into(),
            position,
        }
    }

    /// Reconstructs a list from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedListData) -> Self {
        Self {
            id: data.id,
            board_id: data.board_id,
            title: data.title,
            position: data.position,
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the owning board identifier.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the list title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the order of this list within its board.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Replaces the list title.
    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Moves the list to another slot within its board.
    pub const fn reposition(&mut self, position: Position) {
        self.position = position;
    }
}
