//! Story handlers
//!
//! Listing, detail, and author-scoped create/update/delete endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use kotha_service::{
    CreateStoryRequest, CreateStoryResponse, StoryDetailResponse, StoryListQuery, StoryResponse,
    StoryService, SuccessResponse, UpdateStoryRequest,
};

use crate::extractors::{Identity, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

use super::parse_id;

/// List stories, optionally filtered or as a canonical feed
///
/// GET /stories?search=&category=&sort_by=&type=
pub async fn list_stories(
    State(state): State<AppState>,
    Query(query): Query<StoryListQuery>,
) -> ApiResult<Json<Vec<StoryResponse>>> {
    let service = StoryService::new(state.service_context());
    let stories = service.browse(query).await?;
    Ok(Json(stories))
}

/// Create a story
///
/// POST /stories
pub async fn create_story(
    State(state): State<AppState>,
    identity: Identity,
    ValidatedJson(request): ValidatedJson<CreateStoryRequest>,
) -> ApiResult<Json<CreateStoryResponse>> {
    let service = StoryService::new(state.service_context());
    let created = service.create(&identity.user, request).await?;
    Ok(Json(created))
}

/// Get a story with its comments
///
/// GET /stories/{story_id}
pub async fn get_story(
    State(state): State<AppState>,
    Path(story_id): Path<String>,
) -> ApiResult<Json<StoryDetailResponse>> {
    let story_id = parse_id(&story_id, "story_id")?;

    let service = StoryService::new(state.service_context());
    let detail = service.get_detail(story_id).await?;
    Ok(Json(detail))
}

/// Update a story (author only)
///
/// PUT /stories/{story_id}
pub async fn update_story(
    State(state): State<AppState>,
    identity: Identity,
    Path(story_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStoryRequest>,
) -> ApiResult<Json<StoryResponse>> {
    let story_id = parse_id(&story_id, "story_id")?;

    let service = StoryService::new(state.service_context());
    let updated = service.update(&identity.user, story_id, request).await?;
    Ok(Json(updated))
}

/// Delete a story (author only)
///
/// DELETE /stories/{story_id}
pub async fn delete_story(
    State(state): State<AppState>,
    identity: Identity,
    Path(story_id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    let story_id = parse_id(&story_id, "story_id")?;

    let service = StoryService::new(state.service_context());
    service.delete(&identity.user, story_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
