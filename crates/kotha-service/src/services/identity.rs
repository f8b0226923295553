//! Identity service
//!
//! Resolves the client's anonymous cookie token to a durable user row,
//! creating one on first sight. Resolution never fails the caller: when the
//! backing store is unreachable an ephemeral offline identity is handed out
//! instead, usable for reads but rejected by write paths.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use kotha_core::entities::User;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Identity service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve an anonymous token to a User, creating the row on first sight.
    ///
    /// Idempotent: the same token always maps to the same row. Falls back to
    /// an ephemeral offline identity instead of failing when the store is
    /// unreachable.
    #[instrument(skip(self, token))]
    pub async fn resolve(&self, token: &str) -> User {
        match self.get_or_create(token).await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Identity store unreachable, using ephemeral identity");
                User::offline(token.to_string())
            }
        }
    }

    async fn get_or_create(&self, token: &str) -> ServiceResult<User> {
        if let Some(user) = self.ctx.user_repo().find_by_anonymous_id(token).await? {
            return Ok(user);
        }

        let user = User::new(Uuid::new_v4(), token.to_string());
        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, "Anonymous user created");

        // Re-read: a concurrent first request with the same token may have won
        // the unique index, in which case its row is the durable identity.
        Ok(self
            .ctx
            .user_repo()
            .find_by_anonymous_id(token)
            .await?
            .unwrap_or(user))
    }
}
