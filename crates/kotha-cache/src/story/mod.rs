//! Story cache

mod story_cache;

pub use story_cache::StoryCache;
