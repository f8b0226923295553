//! Anonymous identity extractor
//!
//! Resolves the anonymous cookie token to a user row via the identity
//! service. The cookie itself is minted by the middleware layer on the first
//! request, so by the time a handler runs the token normally exists; a
//! missing cookie still resolves (to a freshly minted token) rather than
//! rejecting the request.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use kotha_core::entities::User;
use kotha_service::IdentityService;

use crate::response::ApiError;
use crate::state::AppState;

/// Anonymous identity resolved from the request cookie
#[derive(Debug, Clone)]
pub struct Identity {
    /// The resolved user (possibly the ephemeral offline identity)
    pub user: User,
    /// The raw cookie token
    pub token: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .expect("CookieJar extraction is infallible");

        let app_state = AppState::from_ref(state);
        let cookie_name = app_state.config().identity.cookie_name.clone();

        let token = jar
            .get(&cookie_name)
            .map(|c| c.value().to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let user = IdentityService::new(app_state.service_context())
            .resolve(&token)
            .await;

        Ok(Identity { user, token })
    }
}
