//! Middleware stack for the API server
//!
//! Provides the anonymous-identity cookie, logging, request ID generation,
//! CORS, rate limiting, and timeouts.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{from_fn_with_state, Next},
    response::Response,
    Router,
};
use axum_extra::extract::CookieJar;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use uuid::Uuid;

use kotha_common::CorsConfig;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply the full middleware stack to the router
///
/// Layers are applied in reverse order in tower, so the request passes
/// RateLimit -> RequestID -> Trace -> Timeout -> CORS -> identity cookie ->
/// handler.
pub fn apply_middleware(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let rate_limit = &state.config().rate_limit;

    // Global (not per-IP) rate limiting, as a backstop against runaway clients
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(rate_limit.requests_per_second.into())
            .burst_size(rate_limit.burst)
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .expect("Failed to create rate limiter configuration"),
    );

    router
        // Anonymous identity cookie (innermost, closest to handlers)
        .layer(from_fn_with_state(
            state.clone(),
            ensure_anonymous_cookie,
        ))
        // CORS
        .layer(create_cors_layer(
            &state.config().cors,
            state.config().app.env.is_production(),
        ))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            Duration::from_secs(30),
        ))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        // Rate limiting (outermost)
        .layer(GovernorLayer {
            config: governor_conf,
        })
}

/// Mint the long-lived anonymous-id cookie on first contact.
///
/// When the cookie is absent a fresh token is injected into the request (so
/// the identity extractor sees it) and Set-Cookie is appended to the
/// response. Existing cookies pass through untouched.
async fn ensure_anonymous_cookie(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = &state.config().identity;

    if jar.get(&identity.cookie_name).is_some() {
        return next.run(request).await;
    }

    let token = Uuid::new_v4().to_string();
    let request_cookie = format!("{}={token}", identity.cookie_name);
    if let Ok(value) = HeaderValue::from_str(&request_cookie) {
        request.headers_mut().append(header::COOKIE, value);
    }

    let max_age_secs = identity.cookie_max_age_days.max(1) * 86_400;
    let set_cookie = format!(
        "{}={token}; Path=/; Max-Age={max_age_secs}; HttpOnly; SameSite=Lax",
        identity.cookie_name
    );

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&set_cookie) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    // In production, only allow configured origins
    // In development, allow any origin if no origins are configured.
    // Credentials (the anonymous cookie) only pair with explicit origins;
    // a wildcard origin with credentials is rejected by browsers.
    if is_production || !config.allowed_origins.is_empty() {
        if config.allowed_origins.is_empty() {
            tracing::warn!(
                "CORS: No allowed origins configured in production mode. \
                 Requests from browsers will be blocked."
            );
            base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        } else {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| {
                    origin.parse::<HeaderValue>().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin: {}", origin);
                        None
                    })
                })
                .collect();

            tracing::info!("CORS: Allowing {} configured origins", origins.len());
            base_layer
                .allow_origin(AllowOrigin::list(origins))
                .allow_credentials(true)
        }
    } else {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(Any)
    }
}
