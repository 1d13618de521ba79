use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FriendsQueryError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListFriendsUseCase: Send + Sync {
    /// Each friend once; empty when the user has none.
    async fn execute(&self, user: UserId) -> Result<Vec<UserSummary>, FriendsQueryError>;
}

#[async_trait]
pub trait CheckFriendshipUseCase: Send + Sync {
    async fn execute(&self, user: UserId, other: Uuid) -> Result<bool, FriendsQueryError>;
}
