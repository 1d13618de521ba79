use async_trait::async_trait;
use uuid::Uuid;

use crate::friendship::application::domain::entities::FriendRequest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FriendshipRepositoryError {
    /// The pending-pair unique index fired.
    #[error("A pending request already exists between these users")]
    DuplicatePending,

    #[error("Referenced user does not exist")]
    UnknownUser,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    async fn create_request(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<FriendRequest, FriendshipRepositoryError>;

    /// Moves a pending request to `accepted` and records the friendship in one transaction.
    /// Returns `false` when the request was no longer pending.
    async fn accept_request(&self, request_id: Uuid) -> Result<bool, FriendshipRepositoryError>;

    /// Moves a pending request to `rejected`. Returns `false` when it was no longer pending.
    async fn reject_request(&self, request_id: Uuid) -> Result<bool, FriendshipRepositoryError>;
}
