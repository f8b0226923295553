//! User entity <-> model mapper

use kotha_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            anonymous_id: model.anonymous_id,
            created_at: model.created_at,
        }
    }
}
