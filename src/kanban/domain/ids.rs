//! UUID-backed identifier newtypes for boards, lists, tasks, and action log
//! entries.
//!
//! Entities refer to each other only through these identifiers; there are no
//! embedded object graphs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_identifier! {
    /// Unique identifier for a board.
    BoardId
}

uuid_identifier! {
    /// Unique identifier for a list within a board.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard::kanban::domain::ListId;
    ///
    /// let id = ListId::new();
    /// assert!(!id.as_ref().is_nil());
    /// ```
    ListId
}

uuid_identifier! {
    /// Unique identifier for a task within a list.
    TaskId
}

uuid_identifier! {
    /// Unique identifier for an audit log entry.
    ActionLogId
}
