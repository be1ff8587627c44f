//! Error payload returned by the HTTP boundary.

use super::{STATUS_NOT_FOUND, STATUS_SERVER_ERROR};
use crate::kanban::services::KanbanError;
use serde::{Deserialize, Serialize};

/// Message sent for every failure that is not a missing entity.
pub const SERVER_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// JSON error body `{message, status}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    message: String,
    status: u16,
}

impl ApiError {
    /// Creates an error body with an explicit status.
    #[must_use]
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Returns the message shown to clients.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }
}

impl From<KanbanError> for ApiError {
    fn from(err: KanbanError) -> Self {
        if err.is_not_found() {
            return Self::new(err.to_string(), STATUS_NOT_FOUND);
        }
        tracing::error!(error = %err, "request failed");
        Self::new(SERVER_ERROR_MESSAGE, STATUS_SERVER_ERROR)
    }
}

/// Result type for HTTP boundary operations.
pub type ApiResult<T> = Result<T, ApiError>;
