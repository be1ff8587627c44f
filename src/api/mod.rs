//! HTTP boundary for the kanban services.
//!
//! [`KanbanApi`] exposes one method per REST route. Each method takes typed
//! path parameters and a deserialized JSON body, calls the matching service,
//! and returns an [`ApiResponse`] carrying the status code and a serializable
//! body, or an [`ApiError`] shaped as `{message, status}`. A router only has
//! to extract parameters and serialize the result.

pub mod dto;
mod error;
mod handlers;

pub use error::{ApiError, ApiResult, SERVER_ERROR_MESSAGE};
pub use handlers::{ApiResponse, KanbanApi};

/// Status code for successful reads and updates.
pub const STATUS_OK: u16 = 200;
/// Status code for successful creates.
pub const STATUS_CREATED: u16 = 201;
/// Status code for successful deletes.
pub const STATUS_NO_CONTENT: u16 = 204;
/// Status code for missing boards, lists, and tasks.
pub const STATUS_NOT_FOUND: u16 = 404;
/// Status code for every other failure.
pub const STATUS_SERVER_ERROR: u16 = 500;
