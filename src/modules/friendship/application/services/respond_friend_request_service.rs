use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::{
    FriendRequestDecision, FriendRequestStatus,
};
use crate::friendship::application::ports::{
    incoming::use_cases::{RespondFriendRequestError, RespondFriendRequestUseCase},
    outgoing::{FriendshipQuery, FriendshipRepository},
};

#[derive(Debug, Clone)]
pub struct RespondFriendRequestService<Q, R>
where
    Q: FriendshipQuery + Send + Sync,
    R: FriendshipRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> RespondFriendRequestService<Q, R>
where
    Q: FriendshipQuery + Send + Sync,
    R: FriendshipRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> RespondFriendRequestUseCase for RespondFriendRequestService<Q, R>
where
    Q: FriendshipQuery + Send + Sync,
    R: FriendshipRepository + Send + Sync,
{
    async fn execute(
        &self,
        request_id: Uuid,
        acting_user: UserId,
        decision: FriendRequestDecision,
    ) -> Result<FriendRequestStatus, RespondFriendRequestError> {
        let request = self
            .query
            .find_request(request_id)
            .await
            .map_err(|e| RespondFriendRequestError::RepositoryError(e.to_string()))?
            .ok_or(RespondFriendRequestError::NotFound)?;

        if request.receiver_id != acting_user.value() {
            warn!(
                request_id = %request_id,
                user_id = %acting_user,
                "Non-receiver tried to resolve friend request"
            );
            return Err(RespondFriendRequestError::NotReceiver);
        }

        if request.status.is_terminal() {
            return Err(RespondFriendRequestError::AlreadyResolved(request.status));
        }

        let changed = match decision {
            FriendRequestDecision::Accept => self.repository.accept_request(request_id).await,
            FriendRequestDecision::Reject => self.repository.reject_request(request_id).await,
        }
        .map_err(|e| RespondFriendRequestError::RepositoryError(e.to_string()))?;

        if !changed {
            // Someone resolved it between our read and the conditional update.
            let current = self
                .query
                .find_request(request_id)
                .await
                .map_err(|e| RespondFriendRequestError::RepositoryError(e.to_string()))?
                .ok_or(RespondFriendRequestError::NotFound)?
                .status;
            return Err(RespondFriendRequestError::AlreadyResolved(current));
        }

        let status = decision.resulting_status();
        info!(request_id = %request_id, status = %status, "Friend request resolved");

        Ok(status)
    }
}
