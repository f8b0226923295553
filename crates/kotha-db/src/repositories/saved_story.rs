//! PostgreSQL implementation of SavedStoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use kotha_core::entities::{SavedStory, Story};
use kotha_core::traits::{RepoResult, SavedStoryRepository};

use crate::models::StoryModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SavedStoryRepository
#[derive(Clone)]
pub struct PgSavedStoryRepository {
    pool: PgPool,
}

impl PgSavedStoryRepository {
    /// Create a new PgSavedStoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SavedStoryRepository for PgSavedStoryRepository {
    #[instrument(skip(self, saved))]
    async fn save(&self, saved: &SavedStory) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO saved_stories (user_id, story_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, story_id) DO NOTHING
            "#,
        )
        .bind(saved.user_id)
        .bind(saved.story_id)
        .bind(saved.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unsave(&self, user_id: Uuid, story_id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM saved_stories WHERE user_id = $1 AND story_id = $2
            "#,
        )
        .bind(user_id)
        .bind(story_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_stories(&self, user_id: Uuid) -> RepoResult<Vec<Story>> {
        let results = sqlx::query_as::<_, StoryModel>(
            r#"
            SELECT s.id, s.user_id, s.title, s.company, s.designation, s.content, s.category,
                   s.likes, s.dislikes, s.comment_count, s.created_at, s.updated_at
            FROM saved_stories ss
            JOIN stories s ON s.id = ss.story_id
            WHERE ss.user_id = $1
            ORDER BY ss.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Story::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSavedStoryRepository>();
    }
}
