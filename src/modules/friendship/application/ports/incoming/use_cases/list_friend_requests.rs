use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::{
    IncomingFriendRequest, OutgoingFriendRequest,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListFriendRequestsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListIncomingRequestsUseCase: Send + Sync {
    async fn execute(
        &self,
        receiver: UserId,
    ) -> Result<Vec<IncomingFriendRequest>, ListFriendRequestsError>;
}

#[async_trait]
pub trait ListOutgoingRequestsUseCase: Send + Sync {
    async fn execute(
        &self,
        sender: UserId,
    ) -> Result<Vec<OutgoingFriendRequest>, ListFriendRequestsError>;
}
