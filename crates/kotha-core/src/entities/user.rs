//! User entity - an anonymous identity tracked by a client-held token

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Anonymous user, created on first sight of a client token and never deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Opaque client-held cookie token mapped to this row
    pub anonymous_id: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User for a freshly seen anonymous token
    pub fn new(id: Uuid, anonymous_id: String) -> Self {
        Self {
            id,
            anonymous_id,
            created_at: Utc::now(),
        }
    }

    /// Ephemeral identity handed out when the backing store is unreachable.
    ///
    /// Never persisted; must not be used to write reactions that are
    /// expected to survive the request.
    pub fn offline(anonymous_id: String) -> Self {
        Self {
            id: Uuid::nil(),
            anonymous_id,
            created_at: Utc::now(),
        }
    }

    /// Check whether this is the non-persisted offline identity
    #[inline]
    pub fn is_ephemeral(&self) -> bool {
        self.id.is_nil()
    }
}
