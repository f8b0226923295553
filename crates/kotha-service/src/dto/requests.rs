//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies that create or edit
//! content also implement `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use kotha_core::ReactionType;

// ============================================================================
// Story Requests
// ============================================================================

/// Create story request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStoryRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 120, message = "Company must be 1-120 characters"))]
    pub company: String,

    #[validate(length(max = 120, message = "Designation must be at most 120 characters"))]
    pub designation: Option<String>,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    /// One of "Positive", "Negative", "Mixed" (case-insensitive)
    pub category: String,
}

/// Update story request; all content fields are resubmitted on edit
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStoryRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 120, message = "Company must be 1-120 characters"))]
    pub company: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    pub category: String,
}

/// Story listing query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryListQuery {
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// "recent" | "popular" | "controversial"
    #[serde(default, alias = "sortBy")]
    pub sort_by: Option<String>,

    /// "trending" | "discussed" | "recent" selects a canonical feed
    #[serde(default, rename = "type")]
    pub feed_type: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Reaction request body
///
/// `currentInteraction` is the client's local view of its prior state. It is
/// accepted for wire compatibility but the engine derives the real state from
/// the store; a mismatch is only logged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReactionRequest {
    #[serde(default, rename = "currentInteraction")]
    pub current_interaction: Option<String>,
}

impl ReactionRequest {
    /// The client's hint as a typed reaction, if it parses
    pub fn hint(&self) -> Option<ReactionType> {
        match self.current_interaction.as_deref() {
            Some("like") => Some(ReactionType::Like),
            Some("dislike") => Some(ReactionType::Dislike),
            _ => None,
        }
    }
}

// ============================================================================
// Saved Story Requests
// ============================================================================

/// Save story request
#[derive(Debug, Clone, Deserialize)]
pub struct SaveStoryRequest {
    #[serde(alias = "storyId")]
    pub story_id: Uuid,
}
