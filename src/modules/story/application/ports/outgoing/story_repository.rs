use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::story::application::domain::entities::Story;

#[derive(Debug, Clone)]
pub struct NewStory {
    pub author_id: Uuid,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub text: Option<String>,
    pub background_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoryRepositoryError {
    #[error("Author does not exist")]
    UnknownAuthor,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StoryRepository: Send + Sync {
    async fn create_story(&self, story: NewStory) -> Result<Story, StoryRepositoryError>;

    /// Removes every story with `expires_at <= now` and returns how many went.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, StoryRepositoryError>;
}
