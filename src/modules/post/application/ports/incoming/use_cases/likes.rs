use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::{Like, LikeTarget};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikeError {
    #[error("Already liked")]
    AlreadyLiked,

    #[error("Like target not found")]
    TargetNotFound,

    #[error("Like not found")]
    LikeNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LikeUseCase: Send + Sync {
    async fn execute(&self, user: UserId, target: LikeTarget) -> Result<Like, LikeError>;
}

#[async_trait]
pub trait UnlikeUseCase: Send + Sync {
    async fn execute(&self, user: UserId, target: LikeTarget) -> Result<(), LikeError>;
}
