use async_trait::async_trait;
use uuid::Uuid;

use crate::friendship::application::domain::entities::FriendRequest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FriendshipQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FriendshipQuery: Send + Sync {
    async fn find_request(
        &self,
        request_id: Uuid,
    ) -> Result<Option<FriendRequest>, FriendshipQueryError>;

    /// A pending request between the two users, whichever of them sent it.
    async fn pending_between(
        &self,
        a: Uuid,
        b: Uuid,
    ) -> Result<Option<FriendRequest>, FriendshipQueryError>;

    /// Pending requests addressed to `user_id`, newest first.
    async fn incoming_pending(&self, user_id: Uuid)
        -> Result<Vec<FriendRequest>, FriendshipQueryError>;

    /// Pending requests sent by `user_id`, newest first.
    async fn outgoing_pending(&self, user_id: Uuid)
        -> Result<Vec<FriendRequest>, FriendshipQueryError>;

    /// Ids on the other side of every friendship row touching `user_id`.
    async fn friend_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, FriendshipQueryError>;

    async fn are_friends(&self, a: Uuid, b: Uuid) -> Result<bool, FriendshipQueryError>;
}
