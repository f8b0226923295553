//! Reaction entity - one user's like/dislike on a story or comment
//!
//! At most one reaction row exists per (user, target) pair; every state
//! change is a delete and/or insert, never an in-place edit.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{ReactionType, TargetRef};

/// Reaction entity (row in `user_interactions`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: Uuid,
    pub target: TargetRef,
    pub reaction: ReactionType,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(user_id: Uuid, target: TargetRef, reaction: ReactionType) -> Self {
        Self {
            user_id,
            target,
            reaction,
            created_at: Utc::now(),
        }
    }
}
