//! Story database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for stories table
#[derive(Debug, Clone, FromRow)]
pub struct StoryModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub company: String,
    pub designation: Option<String>,
    pub content: String,
    pub category: String,
    pub likes: i64,
    pub dislikes: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
