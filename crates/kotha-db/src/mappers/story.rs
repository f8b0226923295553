//! Story entity <-> model mapper

use kotha_core::entities::{Story, StoryCategory};

use crate::models::StoryModel;

impl From<StoryModel> for Story {
    fn from(model: StoryModel) -> Self {
        Story {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            company: model.company,
            designation: model.designation,
            content: model.content,
            // Unknown categories read as Mixed rather than failing the row
            category: model.category.parse().unwrap_or(StoryCategory::Mixed),
            likes: model.likes,
            dislikes: model.dislikes,
            comment_count: model.comment_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
