use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::PostWithAuthor;
use crate::shared::pagination::PageRequest;

pub const DEFAULT_POST_PAGE_SIZE: u64 = 20;
pub const MAX_POST_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostFeedError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Newest first, each post with its author. Posts whose author is gone are skipped.
#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<Vec<PostWithAuthor>, PostFeedError>;
}

#[async_trait]
pub trait ListUserPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        author_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PostWithAuthor>, PostFeedError>;
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<PostWithAuthor, PostFeedError>;
}
