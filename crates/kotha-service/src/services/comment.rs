//! Comment service
//!
//! Listing and adding comments on a story. Adding a comment bumps the
//! story's comment count in the same transaction and invalidates the
//! story's caches (the discussed feed orders by comment count).

use tracing::{debug, info, instrument};
use uuid::Uuid;

use kotha_core::entities::{Comment, User};
use kotha_core::DomainError;

use crate::dto::requests::CreateCommentRequest;
use crate::dto::responses::CommentResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List comments on a story, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, story_id: Uuid) -> ServiceResult<Vec<CommentResponse>> {
        self.require_story(story_id).await?;

        let comments = self.ctx.comment_repo().find_by_story(story_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Add a comment to a story
    #[instrument(skip(self, user, request))]
    pub async fn add(
        &self,
        user: &User,
        story_id: Uuid,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        if user.is_ephemeral() {
            return Err(DomainError::IdentityUnavailable.into());
        }

        self.require_story(story_id).await?;

        let comment = Comment::new(Uuid::new_v4(), story_id, user.id, request.content);
        self.ctx.comment_repo().create(&comment).await?;

        if let Err(e) = self.ctx.story_cache().invalidate_story(story_id).await {
            debug!(error = %e, story_id = %story_id, "Cache invalidation failed");
        }

        info!(
            comment_id = %comment.id,
            story_id = %story_id,
            user_id = %user.id,
            "Comment added"
        );

        Ok(CommentResponse::from(&comment))
    }

    async fn require_story(&self, story_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .story_repo()
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Story", story_id.to_string()))?;
        Ok(())
    }
}
