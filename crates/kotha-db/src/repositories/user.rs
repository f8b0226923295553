//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use kotha_core::entities::User;
use kotha_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, anonymous_id))]
    async fn find_by_anonymous_id(&self, anonymous_id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, anonymous_id, created_at FROM users WHERE anonymous_id = $1
            "#,
        )
        .bind(anonymous_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        // Concurrent first requests with the same token race here; the loser
        // of the unique index no-ops and the caller re-reads the winning row
        sqlx::query(
            r#"
            INSERT INTO users (id, anonymous_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (anonymous_id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.anonymous_id)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
