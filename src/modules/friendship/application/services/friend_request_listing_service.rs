use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::friendship::application::domain::entities::{
    IncomingFriendRequest, OutgoingFriendRequest,
};
use crate::friendship::application::ports::{
    incoming::use_cases::{
        ListFriendRequestsError, ListIncomingRequestsUseCase, ListOutgoingRequestsUseCase,
    },
    outgoing::FriendshipQuery,
};

/// Pending requests on either side of the caller, annotated with the other party.
///
/// Requests whose counterpart account cannot be resolved are left out.
#[derive(Debug, Clone)]
pub struct FriendRequestListingService<Q, U>
where
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    query: Q,
    users: U,
}

impl<Q, U> FriendRequestListingService<Q, U>
where
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

fn query_error(e: impl ToString) -> ListFriendRequestsError {
    ListFriendRequestsError::QueryError(e.to_string())
}

#[async_trait]
impl<Q, U> ListIncomingRequestsUseCase for FriendRequestListingService<Q, U>
where
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        receiver: UserId,
    ) -> Result<Vec<IncomingFriendRequest>, ListFriendRequestsError> {
        let requests = self
            .query
            .incoming_pending(receiver.value())
            .await
            .map_err(query_error)?;

        let sender_ids: Vec<_> = requests.iter().map(|r| r.sender_id).collect();
        let senders = self
            .users
            .summaries_by_id(&sender_ids)
            .await
            .map_err(query_error)?;

        Ok(requests
            .into_iter()
            .filter_map(|request| {
                let sender = senders.get(&request.sender_id)?.clone();
                Some(IncomingFriendRequest { request, sender })
            })
            .collect())
    }
}

#[async_trait]
impl<Q, U> ListOutgoingRequestsUseCase for FriendRequestListingService<Q, U>
where
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        sender: UserId,
    ) -> Result<Vec<OutgoingFriendRequest>, ListFriendRequestsError> {
        let requests = self
            .query
            .outgoing_pending(sender.value())
            .await
            .map_err(query_error)?;

        let receiver_ids: Vec<_> = requests.iter().map(|r| r.receiver_id).collect();
        let receivers = self
            .users
            .summaries_by_id(&receiver_ids)
            .await
            .map_err(query_error)?;

        Ok(requests
            .into_iter()
            .filter_map(|request| {
                let receiver = receivers.get(&request.receiver_id)?.clone();
                Some(OutgoingFriendRequest { request, receiver })
            })
            .collect())
    }
}
