//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (with migrations applied)
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Story Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_story() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateStoryBody::unique();

    let response = server.post("/api/v1/stories", &request).await.unwrap();
    let created: CreateStoryJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(created.success);
    assert_eq!(created.story.title, request.title);
    assert_eq!(created.story.likes, 0);

    let response = server
        .get(&format!("/api/v1/stories/{}", created.id))
        .await
        .unwrap();
    let detail: StoryDetailJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.id, created.id);
    assert_eq!(detail.title, request.title);
    assert!(detail.comments.is_empty());
}

#[tokio::test]
async fn test_get_missing_story_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/v1/stories/{}", Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_invalid_story_id_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/stories/not-a-uuid").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_story_missing_fields_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateStoryBody::unique();
    request.title = String::new();

    let response = server.post("/api/v1/stories", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_story_requires_author() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let update = UpdateStoryBody {
        title: "Edited title".to_string(),
        company: "Acme Corp".to_string(),
        content: "Revised.".to_string(),
        category: "Positive".to_string(),
    };

    // A different anonymous identity must not be able to edit
    let stranger = TestServer::new_client().unwrap();
    let response = server
        .put_with(&stranger, &format!("/api/v1/stories/{}", created.id), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The author can
    let response = server
        .put(&format!("/api/v1/stories/{}", created.id), &update)
        .await
        .unwrap();
    let updated: StoryJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Edited title");
}

#[tokio::test]
async fn test_delete_story() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let response = server
        .delete(&format!("/api/v1/stories/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/stories/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_story_reaction_toggle_and_switch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let like_path = format!("/api/v1/stories/{}/like", created.id);
    let dislike_path = format!("/api/v1/stories/{}/dislike", created.id);

    // None -> Like
    let reaction: ReactionJson = assert_json(
        server.post(&like_path, &ReactionBody::default()).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(reaction.success);
    assert_eq!((reaction.likes, reaction.dislikes), (1, 0));

    // Like -> Dislike (switch: one up, one down)
    let reaction: ReactionJson = assert_json(
        server
            .post(
                &dislike_path,
                &ReactionBody {
                    current_interaction: Some("like".to_string()),
                },
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!((reaction.likes, reaction.dislikes), (0, 1));

    // Dislike -> None (toggle off, back to the starting counters)
    let reaction: ReactionJson = assert_json(
        server
            .post(
                &dislike_path,
                &ReactionBody {
                    current_interaction: Some("dislike".to_string()),
                },
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!((reaction.likes, reaction.dislikes), (0, 0));
}

#[tokio::test]
async fn test_reaction_ignores_stale_client_state() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    // Client lies that it already liked; the server has no such row, so this
    // is a first like, not a toggle-off
    let reaction: ReactionJson = assert_json(
        server
            .post(
                &format!("/api/v1/stories/{}/like", created.id),
                &ReactionBody {
                    current_interaction: Some("like".to_string()),
                },
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!((reaction.likes, reaction.dislikes), (1, 0));
}

#[tokio::test]
async fn test_reactions_from_two_identities_accumulate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let like_path = format!("/api/v1/stories/{}/like", created.id);

    server
        .post(&like_path, &ReactionBody::default())
        .await
        .unwrap();

    let other = TestServer::new_client().unwrap();
    let reaction: ReactionJson = assert_json(
        server
            .post_with(&other, &like_path, &ReactionBody::default())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(reaction.likes, 2);
}

#[tokio::test]
async fn test_reacting_to_missing_story_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            &format!("/api/v1/stories/{}/like", Uuid::new_v4()),
            &ReactionBody::default(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_flow_with_reactions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    // Add a comment
    let comment: CommentJson = assert_json(
        server
            .post(
                &format!("/api/v1/stories/{}/comments", created.id),
                &CreateCommentBody {
                    content: "Same experience.".to_string(),
                },
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(comment.author, "Anonymous");

    // The story's comment count reflects it
    let detail: StoryDetailJson = assert_json(
        server
            .get(&format!("/api/v1/stories/{}", created.id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(detail.comment_count, 1);
    assert_eq!(detail.comments.len(), 1);

    // Like the comment, then switch to dislike
    let like_path = format!(
        "/api/v1/stories/{}/comments/{}/like",
        created.id, comment.id
    );
    let reaction: ReactionJson = assert_json(
        server.post(&like_path, &ReactionBody::default()).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!((reaction.likes, reaction.dislikes), (1, 0));

    let dislike_path = format!(
        "/api/v1/stories/{}/comments/{}/dislike",
        created.id, comment.id
    );
    let reaction: ReactionJson = assert_json(
        server
            .post(&dislike_path, &ReactionBody::default())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!((reaction.likes, reaction.dislikes), (0, 1));
}

#[tokio::test]
async fn test_comment_reaction_is_story_scoped() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let story_a: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let story_b: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let comment: CommentJson = assert_json(
        server
            .post(
                &format!("/api/v1/stories/{}/comments", story_a.id),
                &CreateCommentBody {
                    content: "On story A.".to_string(),
                },
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    // Reacting through the wrong story path must 404
    let response = server
        .post(
            &format!(
                "/api/v1/stories/{}/comments/{}/like",
                story_b.id, comment.id
            ),
            &ReactionBody::default(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Saved Story Tests
// ============================================================================

#[tokio::test]
async fn test_save_and_unsave_story() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let body = SaveStoryBody {
        story_id: created.id,
    };
    assert_status(
        server.post("/api/v1/user/saved", &body).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    // Saving twice is a no-op
    assert_status(
        server.post("/api/v1/user/saved", &body).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let saved: Vec<StoryJson> = assert_json(
        server.get("/api/v1/user/saved").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(saved.iter().filter(|s| s.id == created.id).count(), 1);

    assert_status(
        server
            .delete(&format!("/api/v1/user/saved?story_id={}", created.id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let saved: Vec<StoryJson> = assert_json(
        server.get("/api/v1/user/saved").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(saved.iter().all(|s| s.id != created.id));
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_user_stats_and_my_stories() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created: CreateStoryJson = assert_json(
        server
            .post("/api/v1/stories", &CreateStoryBody::unique())
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    server
        .post(
            &format!("/api/v1/stories/{}/comments", created.id),
            &CreateCommentBody {
                content: "My own comment.".to_string(),
            },
        )
        .await
        .unwrap();

    let stats: UserStatsJson = assert_json(
        server.get("/api/v1/user/stats").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(stats.story_count, 1);
    assert_eq!(stats.comment_count, 1);
    assert_eq!(stats.member_for_days, 0);

    let mine: Vec<StoryJson> = assert_json(
        server.get("/api/v1/user/stories").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, created.id);
}
