//! Reaction target - identifies what a reaction points at
//!
//! Stories and comments share one reaction implementation; a `TargetRef`
//! carries the kind tag that picks the right table/counter pair downstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The kind of entity a reaction targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Story,
    Comment,
}

impl TargetKind {
    /// Stable string form used in the `user_interactions.target_kind` column
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (kind, id) pair identifying a reaction target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: Uuid,
}

impl TargetRef {
    /// Reference a story
    #[inline]
    pub const fn story(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Story,
            id,
        }
    }

    /// Reference a comment
    #[inline]
    pub const fn comment(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Comment,
            id,
        }
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
