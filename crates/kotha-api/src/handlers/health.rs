//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use kotha_service::{HealthResponse, ReadinessChecks, ReadinessResponse};

use crate::state::AppState;

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness probe: verifies the database and Redis are reachable
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let ctx = state.service_context();

    let database = sqlx::query("SELECT 1").execute(ctx.pool()).await.is_ok();
    let redis = ctx.redis_pool().health_check().await.is_ok();

    let ready = database && redis;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            status: if ready { "ready" } else { "degraded" },
            checks: ReadinessChecks { database, redis },
        }),
    )
}
