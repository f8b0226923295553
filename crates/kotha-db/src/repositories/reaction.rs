//! PostgreSQL implementation of ReactionRepository
//!
//! Reaction transitions are the one multi-statement write in the system:
//! the row delete/insert and the counter delta run in a single transaction
//! so the target's counters can never drift from the interaction rows on a
//! partial failure.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use kotha_core::entities::Reaction;
use kotha_core::traits::{ReactionRepository, RepoResult};
use kotha_core::value_objects::{CounterPair, ReactionTransition, TargetKind, TargetRef};

use crate::models::{CounterModel, InteractionModel};

use super::error::{map_db_error, target_not_found};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Counter update for the target's table: atomic in-place delta,
    /// floored at zero, returning the fresh pair
    const fn counter_sql(kind: TargetKind) -> &'static str {
        match kind {
            TargetKind::Story => {
                r#"
                UPDATE stories
                SET likes = GREATEST(0, likes + $1), dislikes = GREATEST(0, dislikes + $2)
                WHERE id = $3
                RETURNING likes, dislikes
                "#
            }
            TargetKind::Comment => {
                r#"
                UPDATE comments
                SET likes = GREATEST(0, likes + $1), dislikes = GREATEST(0, dislikes + $2)
                WHERE id = $3
                RETURNING likes, dislikes
                "#
            }
        }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Uuid, target: TargetRef) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, InteractionModel>(
            r#"
            SELECT user_id, target_kind, target_id, interaction_type, created_at
            FROM user_interactions
            WHERE user_id = $1 AND target_kind = $2 AND target_id = $3
            "#,
        )
        .bind(user_id)
        .bind(target.kind.as_str())
        .bind(target.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self, transition))]
    async fn apply_transition(
        &self,
        user_id: Uuid,
        target: TargetRef,
        transition: &ReactionTransition,
    ) -> RepoResult<CounterPair> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if let Some(reaction) = transition.remove {
            sqlx::query(
                r#"
                DELETE FROM user_interactions
                WHERE user_id = $1 AND target_kind = $2 AND target_id = $3
                  AND interaction_type = $4
                "#,
            )
            .bind(user_id)
            .bind(target.kind.as_str())
            .bind(target.id)
            .bind(reaction.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        if let Some(reaction) = transition.insert {
            // The unique index on (user_id, target_kind, target_id) is the
            // serialization unit: a concurrent insert resolves to the last
            // requested type instead of a duplicate row.
            sqlx::query(
                r#"
                INSERT INTO user_interactions (user_id, target_kind, target_id, interaction_type)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (user_id, target_kind, target_id)
                DO UPDATE SET interaction_type = EXCLUDED.interaction_type,
                              created_at = NOW()
                "#,
            )
            .bind(user_id)
            .bind(target.kind.as_str())
            .bind(target.id)
            .bind(reaction.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        let counters = sqlx::query_as::<_, CounterModel>(Self::counter_sql(target.kind))
            .bind(transition.like_delta())
            .bind(transition.dislike_delta())
            .bind(target.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| target_not_found(target))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(CounterPair::new(counters.likes, counters.dislikes))
    }
}
