//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Comment, Reaction, SavedStory, Story, StoryCategory, User};
use crate::error::DomainError;
use crate::value_objects::{CounterPair, ReactionTransition, TargetRef};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by anonymous token
    async fn find_by_anonymous_id(&self, anonymous_id: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Story Repository
// ============================================================================

/// Sort order for story listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorySort {
    /// Newest first
    #[default]
    Recent,
    /// Most liked first
    Popular,
    /// Most discussed + disliked first
    Controversial,
}

/// Canonical home-page feeds, each limited server-side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryFeed {
    /// Top stories by likes
    Trending,
    /// Top stories by comment count
    Discussed,
    /// Newest stories
    Recent,
}

impl StoryFeed {
    /// Stable key used for cache entries
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Discussed => "discussed",
            Self::Recent => "recent",
        }
    }

    /// All canonical feeds, in cache-invalidation order
    pub const ALL: [Self; 3] = [Self::Trending, Self::Discussed, Self::Recent];
}

/// Filter/sort options for story listings
#[derive(Debug, Clone, Default)]
pub struct StoryQuery {
    /// Case-insensitive substring match over title, company, and content
    pub search: Option<String>,
    pub category: Option<StoryCategory>,
    pub sort: StorySort,
    pub limit: Option<i64>,
}

#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Find story by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Story>>;

    /// List stories matching a query
    async fn list(&self, query: &StoryQuery) -> RepoResult<Vec<Story>>;

    /// Fetch one of the canonical feeds
    async fn feed(&self, feed: StoryFeed, limit: i64) -> RepoResult<Vec<Story>>;

    /// List stories written by a user, newest first
    async fn find_by_author(&self, user_id: Uuid) -> RepoResult<Vec<Story>>;

    /// Count stories written by a user
    async fn count_by_author(&self, user_id: Uuid) -> RepoResult<i64>;

    /// Create a new story
    async fn create(&self, story: &Story) -> RepoResult<()>;

    /// Update an existing story (content fields only)
    async fn update(&self, story: &Story) -> RepoResult<()>;

    /// Delete a story and its dependent rows
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// List comments on a story, newest first
    async fn find_by_story(&self, story_id: Uuid) -> RepoResult<Vec<Comment>>;

    /// Count comments written by a user
    async fn count_by_author(&self, user_id: Uuid) -> RepoResult<i64>;

    /// Create a comment and bump the story's comment count in one transaction
    async fn create(&self, comment: &Comment) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a user's reaction on a target
    async fn find(&self, user_id: Uuid, target: TargetRef) -> RepoResult<Option<Reaction>>;

    /// Execute a planned transition: delete/insert the reaction row and apply
    /// the counter deltas (floored at zero) to the target, all in one
    /// transaction. Returns the target's fresh counters.
    async fn apply_transition(
        &self,
        user_id: Uuid,
        target: TargetRef,
        transition: &ReactionTransition,
    ) -> RepoResult<CounterPair>;
}

// ============================================================================
// Saved Story Repository
// ============================================================================

#[async_trait]
pub trait SavedStoryRepository: Send + Sync {
    /// Save a story for a user; saving twice is a no-op
    async fn save(&self, saved: &SavedStory) -> RepoResult<()>;

    /// Remove a saved story
    async fn unsave(&self, user_id: Uuid, story_id: Uuid) -> RepoResult<()>;

    /// List a user's saved stories, most recently saved first
    async fn find_stories(&self, user_id: Uuid) -> RepoResult<Vec<Story>>;
}
