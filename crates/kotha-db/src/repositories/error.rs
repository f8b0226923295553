//! Error handling utilities for repositories

use kotha_core::error::DomainError;
use kotha_core::value_objects::{TargetKind, TargetRef};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create the not-found error matching a reaction target's kind
pub fn target_not_found(target: TargetRef) -> DomainError {
    match target.kind {
        TargetKind::Story => DomainError::StoryNotFound(target.id),
        TargetKind::Comment => DomainError::CommentNotFound(target.id),
    }
}
