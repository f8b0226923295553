//! Story cache with bounded TTL and scoped invalidation.
//!
//! Caches story details and the canonical feed lists. Invalidation is an
//! explicit call list scoped to the keys a mutation can actually affect: a
//! story mutation clears its detail key plus the feed lists it can appear
//! in; a comment mutation clears only the parent story's detail key.
//! Search/filter listings are never cached, so the invalidation list stays
//! closed.

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use kotha_core::StoryFeed;

use crate::pool::{RedisPool, RedisResult};

/// Key prefix for story details
const STORY_DETAIL_PREFIX: &str = "story:";

/// Key prefix for feed lists
const STORY_FEED_PREFIX: &str = "stories:";

/// Default TTL for cached stories and feeds (5 minutes)
const DEFAULT_STORY_TTL: u64 = 300;

/// TTL-bounded cache for story details and feed lists
#[derive(Clone)]
pub struct StoryCache {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl StoryCache {
    /// Create a new story cache with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_STORY_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate the detail key for a story
    fn detail_key(story_id: Uuid) -> String {
        format!("{STORY_DETAIL_PREFIX}{story_id}")
    }

    /// Generate the list key for a feed
    fn feed_key(feed: StoryFeed) -> String {
        format!("{STORY_FEED_PREFIX}{}", feed.as_str())
    }

    /// Get a cached story detail
    pub async fn get_detail<T: DeserializeOwned>(&self, story_id: Uuid) -> RedisResult<Option<T>> {
        self.pool.get_json(&Self::detail_key(story_id)).await
    }

    /// Cache a story detail
    pub async fn set_detail<T: Serialize>(&self, story_id: Uuid, value: &T) -> RedisResult<()> {
        self.pool
            .set_json(&Self::detail_key(story_id), value, self.ttl_seconds)
            .await
    }

    /// Get a cached feed list
    pub async fn get_feed<T: DeserializeOwned>(&self, feed: StoryFeed) -> RedisResult<Option<T>> {
        self.pool.get_json(&Self::feed_key(feed)).await
    }

    /// Cache a feed list
    pub async fn set_feed<T: Serialize>(&self, feed: StoryFeed, value: &T) -> RedisResult<()> {
        self.pool
            .set_json(&Self::feed_key(feed), value, self.ttl_seconds)
            .await
    }

    /// Invalidate everything a story mutation can affect: the story's detail
    /// entry plus every canonical feed list
    pub async fn invalidate_story(&self, story_id: Uuid) -> RedisResult<()> {
        let mut keys: Vec<String> = StoryFeed::ALL.iter().map(|f| Self::feed_key(*f)).collect();
        keys.push(Self::detail_key(story_id));
        self.pool.delete_many(&keys).await?;

        tracing::debug!(story_id = %story_id, "Invalidated story detail and feed caches");
        Ok(())
    }

    /// Invalidate only a story's detail entry. Used for comment reactions:
    /// those touch comment counters, which the feed lists never display
    pub async fn invalidate_story_detail(&self, story_id: Uuid) -> RedisResult<()> {
        self.pool.delete(&Self::detail_key(story_id)).await?;

        tracing::debug!(story_id = %story_id, "Invalidated story detail cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        let id = Uuid::nil();
        assert_eq!(
            StoryCache::detail_key(id),
            format!("story:{id}")
        );
        assert_eq!(StoryCache::feed_key(StoryFeed::Trending), "stories:trending");
        assert_eq!(StoryCache::feed_key(StoryFeed::Recent), "stories:recent");
    }
}
