//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{comments, health, reactions, saved, stories, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(story_routes()).merge(user_routes())
}

/// Story routes (including comments and reactions)
fn story_routes() -> Router<AppState> {
    Router::new()
        // Story CRUD
        .route("/stories", get(stories::list_stories))
        .route("/stories", post(stories::create_story))
        .route("/stories/:story_id", get(stories::get_story))
        .route("/stories/:story_id", put(stories::update_story))
        .route("/stories/:story_id", delete(stories::delete_story))
        // Story reactions
        .route("/stories/:story_id/like", post(reactions::like_story))
        .route("/stories/:story_id/dislike", post(reactions::dislike_story))
        // Comments
        .route("/stories/:story_id/comments", get(comments::get_comments))
        .route("/stories/:story_id/comments", post(comments::create_comment))
        // Comment reactions
        .route(
            "/stories/:story_id/comments/:comment_id/like",
            post(reactions::like_comment),
        )
        .route(
            "/stories/:story_id/comments/:comment_id/dislike",
            post(reactions::dislike_comment),
        )
}

/// Current-user routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/saved", get(saved::get_saved_stories))
        .route("/user/saved", post(saved::save_story))
        .route("/user/saved", delete(saved::unsave_story))
        .route("/user/stories", get(users::get_my_stories))
        .route("/user/stats", get(users::get_user_stats))
}
