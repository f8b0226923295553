//! Comment entity - an anonymous comment on a story

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::CounterPair;

/// Display name used for all anonymous commenters
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub story_id: Uuid,
    pub user_id: Uuid,
    /// Display name; always [`ANONYMOUS_AUTHOR`] today
    pub author: String,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment with zeroed counters
    pub fn new(id: Uuid, story_id: Uuid, user_id: Uuid, content: String) -> Self {
        Self {
            id,
            story_id,
            user_id,
            author: ANONYMOUS_AUTHOR.to_string(),
            content,
            likes: 0,
            dislikes: 0,
            created_at: Utc::now(),
        }
    }

    /// The comment's reaction counters
    #[inline]
    pub fn counters(&self) -> CounterPair {
        CounterPair::new(self.likes, self.dislikes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let story_id = Uuid::new_v4();
        let comment = Comment::new(
            Uuid::new_v4(),
            story_id,
            Uuid::new_v4(),
            "Same experience here.".to_string(),
        );
        assert_eq!(comment.story_id, story_id);
        assert_eq!(comment.author, ANONYMOUS_AUTHOR);
        assert_eq!(comment.counters(), CounterPair::new(0, 0));
    }
}
