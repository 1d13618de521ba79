mod create_story;
mod reap_stories;
mod story_feed;

pub use create_story::{
    CreateStoryCommand, CreateStoryCommandError, CreateStoryError, CreateStoryUseCase,
    MAX_BACKGROUND_COLOR_LENGTH,
};
pub use reap_stories::{ReapExpiredStoriesUseCase, ReapStoriesError};
pub use story_feed::{
    ListActiveStoriesUseCase, ListUserStoriesUseCase, StoryFeedError, DEFAULT_STORY_LIMIT,
    MAX_STORY_LIMIT,
};
