use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::Comment;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Post does not exist")]
    PostNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Writes keep `posts.comments_count` in step within the same transaction.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError>;

    async fn delete_comment(&self, comment_id: Uuid) -> Result<bool, CommentRepositoryError>;
}
