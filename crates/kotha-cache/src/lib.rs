//! # kotha-cache
//!
//! Redis cache layer: a managed connection pool and the story cache with
//! bounded TTL and scoped invalidation.

pub mod pool;
pub mod story;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool};
pub use story::StoryCache;
