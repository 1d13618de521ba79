use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::story::application::domain::entities::Story;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Only stories with `expires_at > now` are returned, newest first.
#[async_trait]
pub trait StoryQuery: Send + Sync {
    async fn list_active(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Story>, StoryQueryError>;

    async fn list_active_by_author(
        &self,
        author_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Story>, StoryQueryError>;
}
