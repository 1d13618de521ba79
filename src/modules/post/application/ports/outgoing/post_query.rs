use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::{Comment, Post};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side for posts and their comments. Lists are newest first.
#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn find_post(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError>;

    async fn list_posts(&self, limit: u64, offset: u64) -> Result<Vec<Post>, PostQueryError>;

    async fn list_posts_by_author(
        &self,
        author_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Post>, PostQueryError>;

    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>, PostQueryError>;

    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>, PostQueryError>;
}
