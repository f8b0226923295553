//! Reaction service
//!
//! The reaction engine: applies like/dislike clicks to stories and comments
//! through one parameterized implementation. The user's current state is
//! derived from the store, never trusted from the client; the row change and
//! counter delta are executed by the repository in a single transaction.

use tracing::{debug, info, instrument};
use uuid::Uuid;

use kotha_core::entities::User;
use kotha_core::{
    CounterPair, DomainError, InteractionState, ReactionTransition, ReactionType, TargetKind,
    TargetRef,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a reaction click to a story
    #[instrument(skip(self, user, client_hint))]
    pub async fn react_to_story(
        &self,
        story_id: Uuid,
        user: &User,
        requested: ReactionType,
        client_hint: Option<ReactionType>,
    ) -> ServiceResult<CounterPair> {
        // Verify the story exists before any write
        self.ctx
            .story_repo()
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Story", story_id.to_string()))?;

        self.apply(TargetRef::story(story_id), story_id, user, requested, client_hint)
            .await
    }

    /// Apply a reaction click to a comment, scoped to its story
    #[instrument(skip(self, user, client_hint))]
    pub async fn react_to_comment(
        &self,
        story_id: Uuid,
        comment_id: Uuid,
        user: &User,
        requested: ReactionType,
        client_hint: Option<ReactionType>,
    ) -> ServiceResult<CounterPair> {
        // Verify the comment exists in this story
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if comment.story_id != story_id {
            return Err(ServiceError::not_found("Comment", comment_id.to_string()));
        }

        self.apply(
            TargetRef::comment(comment_id),
            story_id,
            user,
            requested,
            client_hint,
        )
        .await
    }

    /// Shared transition flow for both target kinds
    async fn apply(
        &self,
        target: TargetRef,
        story_id: Uuid,
        user: &User,
        requested: ReactionType,
        client_hint: Option<ReactionType>,
    ) -> ServiceResult<CounterPair> {
        // The offline identity is not persisted; a reaction written under it
        // would silently vanish with the request
        if user.is_ephemeral() {
            return Err(DomainError::IdentityUnavailable.into());
        }

        // Server-derived state: the stored row is authoritative
        let current = self
            .ctx
            .reaction_repo()
            .find(user.id, target)
            .await?
            .map(|r| r.reaction);

        if client_hint != current {
            debug!(
                target = %target,
                user_id = %user.id,
                client_hint = ?client_hint,
                stored = ?current,
                "Client interaction hint disagrees with stored state"
            );
        }

        let transition = ReactionTransition::plan(InteractionState::from_reaction(current), requested);

        let counters = self
            .ctx
            .reaction_repo()
            .apply_transition(user.id, target, &transition)
            .await?;

        // Cache invalidation is scoped: a story reaction can change feed
        // ordering, a comment reaction only the story detail. Cache failures
        // must not fail the request.
        let invalidated = match target.kind {
            TargetKind::Story => self.ctx.story_cache().invalidate_story(story_id).await,
            TargetKind::Comment => {
                self.ctx
                    .story_cache()
                    .invalidate_story_detail(story_id)
                    .await
            }
        };
        if let Err(e) = invalidated {
            debug!(error = %e, story_id = %story_id, "Cache invalidation failed");
        }

        info!(
            target = %target,
            user_id = %user.id,
            requested = %requested,
            next_state = ?transition.next_state(),
            likes = counters.likes,
            dislikes = counters.dislikes,
            "Reaction applied"
        );

        Ok(counters)
    }
}
