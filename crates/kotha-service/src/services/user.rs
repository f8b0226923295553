//! User service
//!
//! Aggregate statistics for the current anonymous user.

use chrono::Utc;
use tracing::instrument;

use kotha_core::entities::User;

use crate::dto::responses::UserStatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Story/comment counts and membership age for the current user
    #[instrument(skip(self, user))]
    pub async fn stats(&self, user: &User) -> ServiceResult<UserStatsResponse> {
        if user.is_ephemeral() {
            return Ok(UserStatsResponse {
                story_count: 0,
                comment_count: 0,
                member_for_days: 0,
                created_at: None,
            });
        }

        let story_count = self.ctx.story_repo().count_by_author(user.id).await?;
        let comment_count = self.ctx.comment_repo().count_by_author(user.id).await?;
        let member_for_days = (Utc::now() - user.created_at).num_days().max(0);

        Ok(UserStatsResponse {
            story_count,
            comment_count,
            member_for_days,
            created_at: Some(user.created_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::requests::{CreateCommentRequest, CreateStoryRequest};
    use crate::services::testing::{seed_story, seed_user, test_context};
    use crate::services::{CommentService, StoryService};

    #[tokio::test]
    async fn test_stats_count_own_contributions() {
        let (ctx, store) = test_context();
        let user = seed_user(&store);
        let other_story = seed_story(&store, 0, 0);

        StoryService::new(&ctx)
            .create(
                &user,
                CreateStoryRequest {
                    title: "Mine".to_string(),
                    company: "Acme Corp".to_string(),
                    designation: None,
                    content: "Body.".to_string(),
                    category: "positive".to_string(),
                },
            )
            .await
            .unwrap();

        CommentService::new(&ctx)
            .add(
                &user,
                other_story,
                CreateCommentRequest {
                    content: "A comment.".to_string(),
                },
            )
            .await
            .unwrap();

        let stats = UserService::new(&ctx).stats(&user).await.unwrap();
        assert_eq!(stats.story_count, 1);
        assert_eq!(stats.comment_count, 1);
        assert!(stats.created_at.is_some());
    }

    #[tokio::test]
    async fn test_ephemeral_identity_gets_zeroed_stats() {
        let (ctx, _store) = test_context();
        let offline = kotha_core::entities::User::offline("token".to_string());

        let stats = UserService::new(&ctx).stats(&offline).await.unwrap();
        assert_eq!(stats.story_count, 0);
        assert_eq!(stats.comment_count, 0);
        assert!(stats.created_at.is_none());
    }
}
