//! Entity to DTO mappers

use kotha_core::entities::{Comment, Story};

use super::responses::{CommentResponse, StoryDetailResponse, StoryResponse};

impl From<&Story> for StoryResponse {
    fn from(story: &Story) -> Self {
        Self {
            id: story.id,
            title: story.title.clone(),
            company: story.company.clone(),
            designation: story.designation.clone(),
            content: story.content.clone(),
            category: story.category.as_str().to_string(),
            likes: story.likes,
            dislikes: story.dislikes,
            comment_count: story.comment_count,
            created_at: story.created_at,
            updated_at: story.updated_at,
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author.clone(),
            content: comment.content.clone(),
            likes: comment.likes,
            dislikes: comment.dislikes,
            created_at: comment.created_at,
        }
    }
}

impl StoryDetailResponse {
    /// Assemble a detail response from a story and its comments
    pub fn new(story: &Story, comments: &[Comment]) -> Self {
        Self {
            story: StoryResponse::from(story),
            comments: comments.iter().map(CommentResponse::from).collect(),
        }
    }
}
