//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for user_interactions table
#[derive(Debug, Clone, FromRow)]
pub struct InteractionModel {
    pub user_id: Uuid,
    pub target_kind: String,
    pub target_id: Uuid,
    pub interaction_type: String,
    pub created_at: DateTime<Utc>,
}
