//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: Uuid,
    pub story_id: Uuid,
    pub user_id: Uuid,
    pub author: String,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}
