//! Append-only audit record of a user-initiated mutation.

use super::ActionLogId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One immutable entry of the user action log.
///
/// Entries are never updated or deleted once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    id: ActionLogId,
    action: String,
    created_at: DateTime<Utc>,
}

impl ActionLogEntry {
    /// Creates an entry describing `action`, stamped with the clock's time.
    #[must_use]
    pub fn new(action: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: ActionLogId::new(),
            action: action.into(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an entry from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: ActionLogId, action: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            action,
            created_at,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> ActionLogId {
        self.id
    }

    /// Returns the human-readable action sentence.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns when the action was recorded.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
