use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::{Like, LikeTarget};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikeRepositoryError {
    #[error("Already liked")]
    AlreadyLiked,

    #[error("Like target does not exist")]
    TargetNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Writes keep the target's `likes_count` in step within the same transaction.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn create_like(&self, user_id: Uuid, target: LikeTarget)
        -> Result<Like, LikeRepositoryError>;

    /// Returns `false` when the user had not liked the target.
    async fn delete_like(&self, user_id: Uuid, target: LikeTarget)
        -> Result<bool, LikeRepositoryError>;
}
