//! Service context - dependency container for services
//!
//! Holds all repositories, the story cache, and other dependencies needed by
//! services.

use std::sync::Arc;

use kotha_cache::{SharedRedisPool, StoryCache};
use kotha_core::traits::{
    CommentRepository, ReactionRepository, SavedStoryRepository, StoryRepository, UserRepository,
};
use kotha_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The Redis-backed story cache
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    story_repo: Arc<dyn StoryRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    saved_story_repo: Arc<dyn SavedStoryRepository>,

    // Cache
    story_cache: StoryCache,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        user_repo: Arc<dyn UserRepository>,
        story_repo: Arc<dyn StoryRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        saved_story_repo: Arc<dyn SavedStoryRepository>,
        cache_ttl_seconds: u64,
    ) -> Self {
        let story_cache = StoryCache::with_ttl((*redis_pool).clone(), cache_ttl_seconds);

        Self {
            pool,
            redis_pool,
            user_repo,
            story_repo,
            comment_repo,
            reaction_repo,
            saved_story_repo,
            story_cache,
        }
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the story repository
    pub fn story_repo(&self) -> &dyn StoryRepository {
        self.story_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the saved story repository
    pub fn saved_story_repo(&self) -> &dyn SavedStoryRepository {
        self.saved_story_repo.as_ref()
    }

    // === Cache ===

    /// Get the story cache
    pub fn story_cache(&self) -> &StoryCache {
        &self.story_cache
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    story_repo: Option<Arc<dyn StoryRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    saved_story_repo: Option<Arc<dyn SavedStoryRepository>>,
    cache_ttl_seconds: u64,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            user_repo: None,
            story_repo: None,
            comment_repo: None,
            reaction_repo: None,
            saved_story_repo: None,
            cache_ttl_seconds: 300,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn story_repo(mut self, repo: Arc<dyn StoryRepository>) -> Self {
        self.story_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn saved_story_repo(mut self, repo: Arc<dyn SavedStoryRepository>) -> Self {
        self.saved_story_repo = Some(repo);
        self
    }

    pub fn cache_ttl_seconds(mut self, ttl: u64) -> Self {
        self.cache_ttl_seconds = ttl;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| super::error::ServiceError::validation("redis_pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.story_repo
                .ok_or_else(|| super::error::ServiceError::validation("story_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| super::error::ServiceError::validation("comment_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| super::error::ServiceError::validation("reaction_repo is required"))?,
            self.saved_story_repo
                .ok_or_else(|| super::error::ServiceError::validation("saved_story_repo is required"))?,
            self.cache_ttl_seconds,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
