//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, ReactionRepository, RepoResult, SavedStoryRepository, StoryFeed,
    StoryQuery, StoryRepository, StorySort, UserRepository,
};
