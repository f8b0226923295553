//! Comment entity <-> model mapper

use kotha_core::entities::Comment;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            story_id: model.story_id,
            user_id: model.user_id,
            author: model.author,
            content: model.content,
            likes: model.likes,
            dislikes: model.dislikes,
            created_at: model.created_at,
        }
    }
}
