//! PostgreSQL implementation of StoryRepository

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use kotha_core::entities::Story;
use kotha_core::traits::{RepoResult, StoryFeed, StoryQuery, StoryRepository, StorySort};

use crate::models::StoryModel;

use super::error::map_db_error;

const STORY_COLUMNS: &str =
    "id, user_id, title, company, designation, content, category, likes, dislikes, \
     comment_count, created_at, updated_at";

/// PostgreSQL implementation of StoryRepository
#[derive(Clone)]
pub struct PgStoryRepository {
    pool: PgPool,
}

impl PgStoryRepository {
    /// Create a new PgStoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryRepository for PgStoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Story>> {
        let result = sqlx::query_as::<_, StoryModel>(&format!(
            "SELECT {STORY_COLUMNS} FROM stories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Story::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &StoryQuery) -> RepoResult<Vec<Story>> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {STORY_COLUMNS} FROM stories"));
        let mut has_where = false;

        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            // ILIKE over title, company, and content; wildcards in the term
            // are escaped so user input cannot widen the match
            let escaped = format!(
                "%{}%",
                search.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
            );
            builder.push(" WHERE (title ILIKE ");
            builder.push_bind(escaped.clone());
            builder.push(" OR company ILIKE ");
            builder.push_bind(escaped.clone());
            builder.push(" OR content ILIKE ");
            builder.push_bind(escaped);
            builder.push(")");
            has_where = true;
        }

        if let Some(category) = query.category {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("category = ");
            builder.push_bind(category.as_str());
        }

        builder.push(match query.sort {
            StorySort::Recent => " ORDER BY created_at DESC",
            StorySort::Popular => " ORDER BY likes DESC",
            StorySort::Controversial => " ORDER BY comment_count DESC, dislikes DESC",
        });

        if let Some(limit) = query.limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit.clamp(1, 100));
        }

        let results = builder
            .build_query_as::<StoryModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Story::from).collect())
    }

    #[instrument(skip(self))]
    async fn feed(&self, feed: StoryFeed, limit: i64) -> RepoResult<Vec<Story>> {
        let order = match feed {
            StoryFeed::Trending => "likes DESC",
            StoryFeed::Discussed => "comment_count DESC",
            StoryFeed::Recent => "created_at DESC",
        };

        let results = sqlx::query_as::<_, StoryModel>(&format!(
            "SELECT {STORY_COLUMNS} FROM stories ORDER BY {order} LIMIT $1"
        ))
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Story::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, user_id: Uuid) -> RepoResult<Vec<Story>> {
        let results = sqlx::query_as::<_, StoryModel>(&format!(
            "SELECT {STORY_COLUMNS} FROM stories WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Story::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, user_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM stories WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, story))]
    async fn create(&self, story: &Story) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO stories (id, user_id, title, company, designation, content, category,
                                 likes, dislikes, comment_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(story.id)
        .bind(story.user_id)
        .bind(&story.title)
        .bind(&story.company)
        .bind(&story.designation)
        .bind(&story.content)
        .bind(story.category.as_str())
        .bind(story.likes)
        .bind(story.dislikes)
        .bind(story.comment_count)
        .bind(story.created_at)
        .bind(story.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, story))]
    async fn update(&self, story: &Story) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE stories
            SET title = $1, company = $2, designation = $3, content = $4, category = $5,
                updated_at = $6
            WHERE id = $7
            "#,
        )
        .bind(&story.title)
        .bind(&story.company)
        .bind(&story.designation)
        .bind(&story.content)
        .bind(story.category.as_str())
        .bind(story.updated_at)
        .bind(story.id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        // Interaction rows are polymorphic (no FK on target_id), so the
        // story's and its comments' reactions are cleared here; comments and
        // saved_stories cascade through their foreign keys.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            DELETE FROM user_interactions
            WHERE target_kind = 'comment'
              AND target_id IN (SELECT id FROM comments WHERE story_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            DELETE FROM user_interactions WHERE target_kind = 'story' AND target_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            DELETE FROM stories WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
