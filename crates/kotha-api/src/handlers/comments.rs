//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use kotha_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{Identity, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

use super::parse_id;

/// List comments on a story, newest first
///
/// GET /stories/{story_id}/comments
pub async fn get_comments(
    State(state): State<AppState>,
    Path(story_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let story_id = parse_id(&story_id, "story_id")?;

    let service = CommentService::new(state.service_context());
    let comments = service.list(story_id).await?;
    Ok(Json(comments))
}

/// Add a comment to a story
///
/// POST /stories/{story_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    identity: Identity,
    Path(story_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let story_id = parse_id(&story_id, "story_id")?;

    let service = CommentService::new(state.service_context());
    let comment = service.add(&identity.user, story_id, request).await?;
    Ok(Json(comment))
}
