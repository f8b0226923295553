//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kotha_core::CounterPair;

// ============================================================================
// Common Response Types
// ============================================================================

/// Bare acknowledgement body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

// ============================================================================
// Story Responses
// ============================================================================

/// Story as returned in listings and feeds
///
/// Cached entries round-trip through Redis, hence `Deserialize` as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryResponse {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub content: String,
    pub category: String,
    pub likes: i64,
    pub dislikes: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Story detail with its comments, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDetailResponse {
    #[serde(flatten)]
    pub story: StoryResponse,
    pub comments: Vec<CommentResponse>,
}

/// Response for story creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStoryResponse {
    pub success: bool,
    pub id: Uuid,
    pub story: StoryResponse,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment as returned under a story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Result of a reaction click: the target's fresh counters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReactionResponse {
    pub success: bool,
    pub likes: i64,
    pub dislikes: i64,
}

impl From<CounterPair> for ReactionResponse {
    fn from(counters: CounterPair) -> Self {
        Self {
            success: true,
            likes: counters.likes,
            dislikes: counters.dislikes,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Aggregate statistics for the current anonymous user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatsResponse {
    pub story_count: i64,
    pub comment_count: i64,
    /// Whole days since the identity was first seen
    pub member_for_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Per-dependency readiness results
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessChecks {
    pub database: bool,
    pub redis: bool,
}

/// Readiness response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: ReadinessChecks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_response_from_counters() {
        let response = ReactionResponse::from(CounterPair::new(6, 2));
        assert!(response.success);
        assert_eq!(response.likes, 6);
        assert_eq!(response.dislikes, 2);
    }

    #[test]
    fn test_success_response_serializes() {
        let json = serde_json::to_string(&SuccessResponse::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
