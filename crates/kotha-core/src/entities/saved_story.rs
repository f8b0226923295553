//! Saved story - a user's bookmark on a story

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Bookmark row; unique per (user, story), saving twice is a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedStory {
    pub user_id: Uuid,
    pub story_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl SavedStory {
    /// Create a new SavedStory
    pub fn new(user_id: Uuid, story_id: Uuid) -> Self {
        Self {
            user_id,
            story_id,
            created_at: Utc::now(),
        }
    }
}
