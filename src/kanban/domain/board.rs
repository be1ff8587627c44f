//! Board aggregate: the top-level container of lists.

use super::BoardId;
use serde::{Deserialize, Serialize};

/// A kanban board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    title: String,
}

impl Board {
    /// Creates a new board with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            title: title.into(),
        }
    }

    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: BoardId, title: String) -> Self {
        Self { id, title }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the board title.
    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}
