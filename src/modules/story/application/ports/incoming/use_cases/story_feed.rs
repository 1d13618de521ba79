use async_trait::async_trait;
use uuid::Uuid;

use crate::story::application::domain::entities::StoryWithAuthor;

pub const DEFAULT_STORY_LIMIT: u64 = 10;
pub const MAX_STORY_LIMIT: u64 = 50;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoryFeedError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListActiveStoriesUseCase: Send + Sync {
    async fn execute(&self, limit: u64) -> Result<Vec<StoryWithAuthor>, StoryFeedError>;
}

#[async_trait]
pub trait ListUserStoriesUseCase: Send + Sync {
    async fn execute(&self, author_id: Uuid) -> Result<Vec<StoryWithAuthor>, StoryFeedError>;
}
