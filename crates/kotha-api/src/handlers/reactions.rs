//! Reaction handlers
//!
//! Four routes, one flow: story/comment crossed with like/dislike all
//! delegate to the reaction service. The body's `currentInteraction` is the
//! client's local view; it is passed along as a hint only.

use axum::{
    extract::{Path, State},
    Json,
};
use kotha_core::ReactionType;
use kotha_service::{ReactionRequest, ReactionResponse, ReactionService};

use crate::extractors::Identity;
use crate::response::ApiResult;
use crate::state::AppState;

use super::parse_id;

/// Like a story
///
/// POST /stories/{story_id}/like
pub async fn like_story(
    state: State<AppState>,
    identity: Identity,
    path: Path<String>,
    body: Option<Json<ReactionRequest>>,
) -> ApiResult<Json<ReactionResponse>> {
    react_to_story(state, identity, path, body, ReactionType::Like).await
}

/// Dislike a story
///
/// POST /stories/{story_id}/dislike
pub async fn dislike_story(
    state: State<AppState>,
    identity: Identity,
    path: Path<String>,
    body: Option<Json<ReactionRequest>>,
) -> ApiResult<Json<ReactionResponse>> {
    react_to_story(state, identity, path, body, ReactionType::Dislike).await
}

/// Like a comment
///
/// POST /stories/{story_id}/comments/{comment_id}/like
pub async fn like_comment(
    state: State<AppState>,
    identity: Identity,
    path: Path<(String, String)>,
    body: Option<Json<ReactionRequest>>,
) -> ApiResult<Json<ReactionResponse>> {
    react_to_comment(state, identity, path, body, ReactionType::Like).await
}

/// Dislike a comment
///
/// POST /stories/{story_id}/comments/{comment_id}/dislike
pub async fn dislike_comment(
    state: State<AppState>,
    identity: Identity,
    path: Path<(String, String)>,
    body: Option<Json<ReactionRequest>>,
) -> ApiResult<Json<ReactionResponse>> {
    react_to_comment(state, identity, path, body, ReactionType::Dislike).await
}

async fn react_to_story(
    State(state): State<AppState>,
    identity: Identity,
    Path(story_id): Path<String>,
    body: Option<Json<ReactionRequest>>,
    requested: ReactionType,
) -> ApiResult<Json<ReactionResponse>> {
    let story_id = parse_id(&story_id, "story_id")?;
    let hint = client_hint(body);

    let service = ReactionService::new(state.service_context());
    let counters = service
        .react_to_story(story_id, &identity.user, requested, hint)
        .await?;

    Ok(Json(ReactionResponse::from(counters)))
}

async fn react_to_comment(
    State(state): State<AppState>,
    identity: Identity,
    Path((story_id, comment_id)): Path<(String, String)>,
    body: Option<Json<ReactionRequest>>,
    requested: ReactionType,
) -> ApiResult<Json<ReactionResponse>> {
    let story_id = parse_id(&story_id, "story_id")?;
    let comment_id = parse_id(&comment_id, "comment_id")?;
    let hint = client_hint(body);

    let service = ReactionService::new(state.service_context());
    let counters = service
        .react_to_comment(story_id, comment_id, &identity.user, requested, hint)
        .await?;

    Ok(Json(ReactionResponse::from(counters)))
}

fn client_hint(body: Option<Json<ReactionRequest>>) -> Option<ReactionType> {
    body.and_then(|Json(request)| request.hint())
}
