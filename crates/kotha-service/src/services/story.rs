//! Story service
//!
//! Listing, feeds, detail, and author-scoped create/update/delete. The
//! canonical feeds and story details are served cache-aside; filtered
//! listings always hit the database so the cache invalidation list stays
//! closed.

use tracing::{debug, info, instrument};
use uuid::Uuid;

use kotha_core::entities::{Story, User};
use kotha_core::traits::{StoryFeed, StoryQuery, StorySort};
use kotha_core::DomainError;

use crate::dto::requests::{CreateStoryRequest, StoryListQuery, UpdateStoryRequest};
use crate::dto::responses::{CreateStoryResponse, StoryDetailResponse, StoryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Stories per canonical feed
pub const FEED_LIMIT: i64 = 10;

/// Story service
pub struct StoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StoryService<'a> {
    /// Create a new StoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Browse stories: either a canonical feed (`type` param) or a filtered,
    /// sorted listing
    #[instrument(skip(self))]
    pub async fn browse(&self, query: StoryListQuery) -> ServiceResult<Vec<StoryResponse>> {
        let feed = match query.feed_type.as_deref() {
            Some("trending") => Some(StoryFeed::Trending),
            Some("discussed") => Some(StoryFeed::Discussed),
            Some("recent") => Some(StoryFeed::Recent),
            _ => None,
        };

        // Feeds are only cacheable unfiltered
        if let Some(feed) = feed {
            if query.search.is_none() && query.category.is_none() {
                return self.feed(feed).await;
            }
        }

        let category = match query.category.as_deref() {
            None | Some("all" | "") => None,
            Some(raw) => Some(
                raw.parse()
                    .map_err(|_| DomainError::InvalidCategory(raw.to_string()))?,
            ),
        };

        let sort = match query.sort_by.as_deref() {
            Some("popular") => StorySort::Popular,
            Some("controversial") => StorySort::Controversial,
            _ => StorySort::Recent,
        };

        let stories = self
            .ctx
            .story_repo()
            .list(&StoryQuery {
                search: query.search.filter(|s| !s.is_empty()),
                category,
                sort,
                limit: None,
            })
            .await?;

        Ok(stories.iter().map(StoryResponse::from).collect())
    }

    /// Fetch a canonical feed, cache-aside
    #[instrument(skip(self))]
    pub async fn feed(&self, feed: StoryFeed) -> ServiceResult<Vec<StoryResponse>> {
        if let Ok(Some(cached)) = self
            .ctx
            .story_cache()
            .get_feed::<Vec<StoryResponse>>(feed)
            .await
        {
            return Ok(cached);
        }

        let stories = self.ctx.story_repo().feed(feed, FEED_LIMIT).await?;
        let responses: Vec<StoryResponse> = stories.iter().map(StoryResponse::from).collect();

        if let Err(e) = self.ctx.story_cache().set_feed(feed, &responses).await {
            debug!(error = %e, feed = feed.as_str(), "Failed to cache feed");
        }

        Ok(responses)
    }

    /// Fetch a story with its comments, cache-aside
    #[instrument(skip(self))]
    pub async fn get_detail(&self, story_id: Uuid) -> ServiceResult<StoryDetailResponse> {
        if let Ok(Some(cached)) = self
            .ctx
            .story_cache()
            .get_detail::<StoryDetailResponse>(story_id)
            .await
        {
            return Ok(cached);
        }

        let story = self.require_story(story_id).await?;
        let comments = self.ctx.comment_repo().find_by_story(story_id).await?;
        let detail = StoryDetailResponse::new(&story, &comments);

        if let Err(e) = self.ctx.story_cache().set_detail(story_id, &detail).await {
            debug!(error = %e, story_id = %story_id, "Failed to cache story detail");
        }

        Ok(detail)
    }

    /// Create a new story
    #[instrument(skip(self, user, request))]
    pub async fn create(
        &self,
        user: &User,
        request: CreateStoryRequest,
    ) -> ServiceResult<CreateStoryResponse> {
        if user.is_ephemeral() {
            return Err(DomainError::IdentityUnavailable.into());
        }

        let category = request
            .category
            .parse()
            .map_err(|_| DomainError::InvalidCategory(request.category.clone()))?;

        let story = Story::new(
            Uuid::new_v4(),
            user.id,
            request.title,
            request.company,
            request.content,
            category,
        )
        .with_designation(request.designation);

        self.ctx.story_repo().create(&story).await?;
        self.invalidate(story.id).await;

        info!(story_id = %story.id, user_id = %user.id, "Story created");

        Ok(CreateStoryResponse {
            success: true,
            id: story.id,
            story: StoryResponse::from(&story),
        })
    }

    /// Update a story; only the author may edit
    #[instrument(skip(self, user, request))]
    pub async fn update(
        &self,
        user: &User,
        story_id: Uuid,
        request: UpdateStoryRequest,
    ) -> ServiceResult<StoryResponse> {
        if user.is_ephemeral() {
            return Err(DomainError::IdentityUnavailable.into());
        }

        let mut story = self.require_story(story_id).await?;
        if !story.is_author(user.id) {
            return Err(DomainError::NotStoryAuthor.into());
        }

        let category = request
            .category
            .parse()
            .map_err(|_| DomainError::InvalidCategory(request.category.clone()))?;

        story.edit(request.title, request.company, request.content, category);
        self.ctx.story_repo().update(&story).await?;
        self.invalidate(story_id).await;

        info!(story_id = %story_id, user_id = %user.id, "Story updated");

        Ok(StoryResponse::from(&story))
    }

    /// Delete a story; only the author may delete
    #[instrument(skip(self, user))]
    pub async fn delete(&self, user: &User, story_id: Uuid) -> ServiceResult<()> {
        if user.is_ephemeral() {
            return Err(DomainError::IdentityUnavailable.into());
        }

        let story = self.require_story(story_id).await?;
        if !story.is_author(user.id) {
            return Err(DomainError::NotStoryAuthor.into());
        }

        self.ctx.story_repo().delete(story_id).await?;
        self.invalidate(story_id).await;

        info!(story_id = %story_id, user_id = %user.id, "Story deleted");

        Ok(())
    }

    /// List the current user's own stories, newest first
    #[instrument(skip(self, user))]
    pub async fn my_stories(&self, user: &User) -> ServiceResult<Vec<StoryResponse>> {
        // The ephemeral identity owns nothing
        if user.is_ephemeral() {
            return Ok(Vec::new());
        }

        let stories = self.ctx.story_repo().find_by_author(user.id).await?;
        Ok(stories.iter().map(StoryResponse::from).collect())
    }

    async fn require_story(&self, story_id: Uuid) -> ServiceResult<Story> {
        self.ctx
            .story_repo()
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Story", story_id.to_string()))
    }

    async fn invalidate(&self, story_id: Uuid) {
        if let Err(e) = self.ctx.story_cache().invalidate_story(story_id).await {
            debug!(error = %e, story_id = %story_id, "Cache invalidation failed");
        }
    }
}
