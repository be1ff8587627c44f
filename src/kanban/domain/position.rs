//! Order field shared by lists within a board and tasks within a list.

use super::KanbanDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One-based sort key of an entity among its siblings.
///
/// Positions are only meaningful relative to siblings sharing the same
/// parent. They are not unique: two siblings may hold the same value after a
/// racing create or a partial reorder.
///
/// # Examples
///
/// ```
/// use corkboard::kanban::domain::Position;
///
/// let third = Position::from_index(2).expect("index fits");
/// assert_eq!(third.value(), 3);
/// assert_eq!(Position::FIRST.value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(u32);

impl Position {
    /// The first slot of a sibling set.
    pub const FIRST: Self = Self(1);

    /// Largest position representable in the `INTEGER` storage column.
    const MAX_PERSISTED_VALUE: u32 = i32::MAX as u32;

    /// Creates a validated position.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::PositionOutOfRange`] when the value is
    /// zero or exceeds the storage maximum (`i32::MAX`).
    pub const fn new(value: u32) -> Result<Self, KanbanDomainError> {
        if value == 0 || value > Self::MAX_PERSISTED_VALUE {
            return Err(KanbanDomainError::PositionOutOfRange(value as u64));
        }
        Ok(Self(value))
    }

    /// Converts a zero-based index into the matching one-based position.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::PositionOutOfRange`] when the index does
    /// not fit in the storage column.
    pub fn from_index(index: usize) -> Result<Self, KanbanDomainError> {
        let value = u32::try_from(index)
            .ok()
            .and_then(|raw| raw.checked_add(1))
            .ok_or(KanbanDomainError::PositionOutOfRange(
                u64::try_from(index).unwrap_or(u64::MAX),
            ))?;
        Self::new(value)
    }

    /// Returns the slot directly after this one.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::PositionOutOfRange`] when the next slot
    /// exceeds the storage maximum.
    pub const fn next(self) -> Result<Self, KanbanDomainError> {
        match self.0.checked_add(1) {
            Some(value) => Self::new(value),
            None => Err(KanbanDomainError::PositionOutOfRange(u32::MAX as u64 + 1)),
        }
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
