//! HTTP request handlers

pub mod comments;
pub mod health;
pub mod reactions;
pub mod saved;
pub mod stories;
pub mod users;

use uuid::Uuid;

use crate::response::ApiError;

/// Parse a path segment as a UUID
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_path(format!("Invalid {what} format")))
}
