//! Request/response fixtures for integration tests

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Story creation payload
#[derive(Debug, Clone, Serialize)]
pub struct CreateStoryBody {
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub content: String,
    pub category: String,
}

impl CreateStoryBody {
    /// A valid story payload with a unique title
    pub fn unique() -> Self {
        Self {
            title: format!("Test story {}", Uuid::new_v4()),
            company: "Acme Corp".to_string(),
            designation: Some("Engineer".to_string()),
            content: "Worked there for a year. It was fine.".to_string(),
            category: "Mixed".to_string(),
        }
    }
}

/// Story edit payload
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStoryBody {
    pub title: String,
    pub company: String,
    pub content: String,
    pub category: String,
}

/// Comment creation payload
#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentBody {
    pub content: String,
}

/// Reaction payload; mirrors the client's local interaction cache
#[derive(Debug, Clone, Serialize, Default)]
pub struct ReactionBody {
    #[serde(rename = "currentInteraction")]
    pub current_interaction: Option<String>,
}

/// Save-story payload
#[derive(Debug, Clone, Serialize)]
pub struct SaveStoryBody {
    #[serde(rename = "storyId")]
    pub story_id: Uuid,
}

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StoryJson {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub category: String,
    pub likes: i64,
    pub dislikes: i64,
    pub comment_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateStoryJson {
    pub success: bool,
    pub id: Uuid,
    pub story: StoryJson,
}

#[derive(Debug, Deserialize)]
pub struct StoryDetailJson {
    pub id: Uuid,
    pub title: String,
    pub likes: i64,
    pub dislikes: i64,
    pub comment_count: i64,
    pub comments: Vec<CommentJson>,
}

#[derive(Debug, Deserialize)]
pub struct CommentJson {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReactionJson {
    pub success: bool,
    pub likes: i64,
    pub dislikes: i64,
}

#[derive(Debug, Deserialize)]
pub struct UserStatsJson {
    pub story_count: i64,
    pub comment_count: i64,
    pub member_for_days: i64,
}
