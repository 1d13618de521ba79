use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::FriendRequest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendFriendRequestError {
    #[error("You cannot send a friend request to yourself")]
    CannotBefriendSelf,

    #[error("Receiver not found")]
    ReceiverNotFound,

    #[error("Friend request already sent")]
    DuplicateRequest,

    #[error("Already friends")]
    AlreadyFriends,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendFriendRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        sender: UserId,
        receiver_id: Uuid,
    ) -> Result<FriendRequest, SendFriendRequestError>;
}
