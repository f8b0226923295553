//! Saved story handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use kotha_service::{SaveStoryRequest, SavedStoryService, StoryResponse, SuccessResponse};

use crate::extractors::Identity;
use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for removing a saved story
#[derive(Debug, Deserialize)]
pub struct UnsaveQuery {
    #[serde(alias = "storyId")]
    pub story_id: Uuid,
}

/// List the current user's saved stories
///
/// GET /user/saved
pub async fn get_saved_stories(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<Vec<StoryResponse>>> {
    let service = SavedStoryService::new(state.service_context());
    let stories = service.list(&identity.user).await?;
    Ok(Json(stories))
}

/// Save a story for the current user
///
/// POST /user/saved
pub async fn save_story(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<SaveStoryRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = SavedStoryService::new(state.service_context());
    service.save(&identity.user, request.story_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Remove a saved story
///
/// DELETE /user/saved?story_id={id}
pub async fn unsave_story(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<UnsaveQuery>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = SavedStoryService::new(state.service_context());
    service.unsave(&identity.user, query.story_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
