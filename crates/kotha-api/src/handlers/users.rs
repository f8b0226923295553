//! User handlers
//!
//! Endpoints scoped to the current anonymous identity.

use axum::{extract::State, Json};

use kotha_service::{StoryResponse, StoryService, UserService, UserStatsResponse};

use crate::extractors::Identity;
use crate::response::ApiResult;
use crate::state::AppState;

/// List the current user's own stories
///
/// GET /user/stories
pub async fn get_my_stories(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<Vec<StoryResponse>>> {
    let service = StoryService::new(state.service_context());
    let stories = service.my_stories(&identity.user).await?;
    Ok(Json(stories))
}

/// Get aggregate stats for the current user
///
/// GET /user/stats
pub async fn get_user_stats(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<UserStatsResponse>> {
    let service = UserService::new(state.service_context());
    let stats = service.stats(&identity.user).await?;
    Ok(Json(stats))
}
