//! Saved story service
//!
//! Bookmarks: save, unsave, and list the current user's saved stories.

use tracing::{info, instrument};
use uuid::Uuid;

use kotha_core::entities::{SavedStory, User};
use kotha_core::DomainError;

use crate::dto::responses::StoryResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Saved story service
pub struct SavedStoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SavedStoryService<'a> {
    /// Create a new SavedStoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the user's saved stories, most recently saved first
    #[instrument(skip(self, user))]
    pub async fn list(&self, user: &User) -> ServiceResult<Vec<StoryResponse>> {
        if user.is_ephemeral() {
            return Ok(Vec::new());
        }

        let stories = self.ctx.saved_story_repo().find_stories(user.id).await?;
        Ok(stories.iter().map(StoryResponse::from).collect())
    }

    /// Save a story; saving an already-saved story is a no-op
    #[instrument(skip(self, user))]
    pub async fn save(&self, user: &User, story_id: Uuid) -> ServiceResult<()> {
        if user.is_ephemeral() {
            return Err(DomainError::IdentityUnavailable.into());
        }

        self.ctx
            .story_repo()
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Story", story_id.to_string()))?;

        let saved = SavedStory::new(user.id, story_id);
        self.ctx.saved_story_repo().save(&saved).await?;

        info!(story_id = %story_id, user_id = %user.id, "Story saved");
        Ok(())
    }

    /// Remove a story from the user's saved list
    #[instrument(skip(self, user))]
    pub async fn unsave(&self, user: &User, story_id: Uuid) -> ServiceResult<()> {
        if user.is_ephemeral() {
            return Err(DomainError::IdentityUnavailable.into());
        }

        self.ctx.saved_story_repo().unsave(user.id, story_id).await?;

        info!(story_id = %story_id, user_id = %user.id, "Story unsaved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{seed_story, seed_user, test_context};

    #[tokio::test]
    async fn test_save_and_list_and_unsave() {
        let (ctx, store) = test_context();
        let user = seed_user(&store);
        let story = seed_story(&store, 0, 0);
        let service = SavedStoryService::new(&ctx);

        service.save(&user, story).await.unwrap();
        // Saving twice is a no-op
        service.save(&user, story).await.unwrap();

        let saved = service.list(&user).await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, story);

        service.unsave(&user, story).await.unwrap();
        assert!(service.list(&user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_missing_story_is_not_found() {
        let (ctx, store) = test_context();
        let user = seed_user(&store);
        let service = SavedStoryService::new(&ctx);

        let err = service.save(&user, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_ephemeral_identity_lists_nothing() {
        let (ctx, _store) = test_context();
        let offline = kotha_core::entities::User::offline("token".to_string());
        let service = SavedStoryService::new(&ctx);

        assert!(service.list(&offline).await.unwrap().is_empty());
        assert!(service.save(&offline, Uuid::new_v4()).await.is_err());
    }
}
