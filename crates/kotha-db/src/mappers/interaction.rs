//! Reaction entity <-> model mapper

use kotha_core::entities::Reaction;
use kotha_core::{DomainError, ReactionType, TargetKind, TargetRef};

use crate::models::InteractionModel;

impl TryFrom<InteractionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: InteractionModel) -> Result<Self, Self::Error> {
        let kind = match model.target_kind.as_str() {
            "story" => TargetKind::Story,
            "comment" => TargetKind::Comment,
            other => {
                return Err(DomainError::DatabaseError(format!(
                    "corrupt interaction row: unknown target kind {other:?}"
                )))
            }
        };
        let reaction = match model.interaction_type.as_str() {
            "like" => ReactionType::Like,
            "dislike" => ReactionType::Dislike,
            other => {
                return Err(DomainError::DatabaseError(format!(
                    "corrupt interaction row: unknown interaction type {other:?}"
                )))
            }
        };

        Ok(Reaction {
            user_id: model.user_id,
            target: TargetRef {
                kind,
                id: model.target_id,
            },
            reaction,
            created_at: model.created_at,
        })
    }
}
