use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::{
    FriendRequestDecision, FriendRequestStatus,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RespondFriendRequestError {
    #[error("Friend request not found")]
    NotFound,

    #[error("Only the receiver can respond to a friend request")]
    NotReceiver,

    #[error("Friend request was already {0}")]
    AlreadyResolved(FriendRequestStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RespondFriendRequestUseCase: Send + Sync {
    /// Returns the status the request ended in.
    async fn execute(
        &self,
        request_id: Uuid,
        acting_user: UserId,
        decision: FriendRequestDecision,
    ) -> Result<FriendRequestStatus, RespondFriendRequestError>;
}
