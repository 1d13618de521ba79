pub mod story_query;
pub mod story_repository;

pub use story_query::{StoryQuery, StoryQueryError};
pub use story_repository::{NewStory, StoryRepository, StoryRepositoryError};
