use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: Uuid,
    pub content: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Author does not exist")]
    UnknownAuthor,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, post: NewPost) -> Result<Post, PostRepositoryError>;

    /// Comments and likes on the post go with it. Returns `false` if nothing was deleted.
    async fn delete_post(&self, post_id: Uuid) -> Result<bool, PostRepositoryError>;
}
