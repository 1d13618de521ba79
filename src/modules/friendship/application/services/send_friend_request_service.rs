use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::friendship::application::domain::entities::FriendRequest;
use crate::friendship::application::ports::{
    incoming::use_cases::{SendFriendRequestError, SendFriendRequestUseCase},
    outgoing::{FriendshipQuery, FriendshipRepository, FriendshipRepositoryError},
};

#[derive(Debug, Clone)]
pub struct SendFriendRequestService<Q, R, U>
where
    Q: FriendshipQuery + Send + Sync,
    R: FriendshipRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    query: Q,
    repository: R,
    users: U,
}

impl<Q, R, U> SendFriendRequestService<Q, R, U>
where
    Q: FriendshipQuery + Send + Sync,
    R: FriendshipRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(query: Q, repository: R, users: U) -> Self {
        Self {
            query,
            repository,
            users,
        }
    }
}

#[async_trait]
impl<Q, R, U> SendFriendRequestUseCase for SendFriendRequestService<Q, R, U>
where
    Q: FriendshipQuery + Send + Sync,
    R: FriendshipRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        sender: UserId,
        receiver_id: Uuid,
    ) -> Result<FriendRequest, SendFriendRequestError> {
        let sender_id = sender.value();

        if sender_id == receiver_id {
            return Err(SendFriendRequestError::CannotBefriendSelf);
        }

        let receiver = self
            .users
            .find_by_id(receiver_id)
            .await
            .map_err(|e| SendFriendRequestError::RepositoryError(e.to_string()))?;
        if receiver.is_none() {
            return Err(SendFriendRequestError::ReceiverNotFound);
        }

        if self
            .query
            .are_friends(sender_id, receiver_id)
            .await
            .map_err(|e| SendFriendRequestError::RepositoryError(e.to_string()))?
        {
            return Err(SendFriendRequestError::AlreadyFriends);
        }

        // Either direction counts; the unique index backs this up under races.
        if self
            .query
            .pending_between(sender_id, receiver_id)
            .await
            .map_err(|e| SendFriendRequestError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(SendFriendRequestError::DuplicateRequest);
        }

        let request = self
            .repository
            .create_request(sender_id, receiver_id)
            .await
            .map_err(|e| match e {
                FriendshipRepositoryError::DuplicatePending => {
                    SendFriendRequestError::DuplicateRequest
                }
                FriendshipRepositoryError::UnknownUser => SendFriendRequestError::ReceiverNotFound,
                other => SendFriendRequestError::RepositoryError(other.to_string()),
            })?;

        info!(
            request_id = %request.id,
            sender_id = %sender_id,
            receiver_id = %receiver_id,
            "Friend request sent"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friendship::application::domain::entities::FriendRequestStatus;
    use crate::tests::support::memory::{InMemorySocialGraph, InMemoryUsers};

    struct Fixture {
        users: InMemoryUsers,
        graph: InMemorySocialGraph,
        service: SendFriendRequestService<InMemorySocialGraph, InMemorySocialGraph, InMemoryUsers>,
    }

    fn fixture() -> Fixture {
        let users = InMemoryUsers::default();
        let graph = InMemorySocialGraph::default();
        let service = SendFriendRequestService::new(graph.clone(), graph.clone(), users.clone());
        Fixture {
            users,
            graph,
            service,
        }
    }

    #[tokio::test]
    async fn creates_pending_request() {
        // Arrange
        let f = fixture();
        let a = f.users.add("ana").await;
        let b = f.users.add("ben").await;

        // Act
        let request = f.service.execute(UserId::from(a), b).await.unwrap();

        // Assert
        assert_eq!(request.sender_id, a);
        assert_eq!(request.receiver_id, b);
        assert_eq!(request.status, FriendRequestStatus::Pending);
    }

    #[tokio::test]
    async fn second_request_same_direction_is_duplicate_and_first_stays_pending() {
        let f = fixture();
        let a = f.users.add("ana").await;
        let b = f.users.add("ben").await;
        let first = f.service.execute(UserId::from(a), b).await.unwrap();

        let second = f.service.execute(UserId::from(a), b).await;

        assert!(matches!(second, Err(SendFriendRequestError::DuplicateRequest)));
        let stored = f.graph.find_request(first.id).await.unwrap().unwrap();
        assert_eq!(stored.status, FriendRequestStatus::Pending);
    }

    #[tokio::test]
    async fn reverse_direction_while_pending_is_duplicate() {
        let f = fixture();
        let a = f.users.add("ana").await;
        let b = f.users.add("ben").await;
        f.service.execute(UserId::from(a), b).await.unwrap();

        let reverse = f.service.execute(UserId::from(b), a).await;

        assert!(matches!(reverse, Err(SendFriendRequestError::DuplicateRequest)));
    }

    #[tokio::test]
    async fn existing_friendship_is_conflict() {
        let f = fixture();
        let a = f.users.add("ana").await;
        let b = f.users.add("ben").await;
        f.graph.insert_friendship_row(b, a);

        let result = f.service.execute(UserId::from(a), b).await;

        assert!(matches!(result, Err(SendFriendRequestError::AlreadyFriends)));
    }

    #[tokio::test]
    async fn self_request_is_rejected() {
        let f = fixture();
        let a = f.users.add("ana").await;

        let result = f.service.execute(UserId::from(a), a).await;

        assert!(matches!(result, Err(SendFriendRequestError::CannotBefriendSelf)));
    }

    #[tokio::test]
    async fn unknown_receiver_is_not_found() {
        let f = fixture();
        let a = f.users.add("ana").await;

        let result = f.service.execute(UserId::from(a), Uuid::new_v4()).await;

        assert!(matches!(result, Err(SendFriendRequestError::ReceiverNotFound)));
    }

    #[derive(Clone)]
    struct RacingRepository;

    #[async_trait]
    impl FriendshipRepository for RacingRepository {
        async fn create_request(
            &self,
            _sender_id: Uuid,
            _receiver_id: Uuid,
        ) -> Result<FriendRequest, FriendshipRepositoryError> {
            Err(FriendshipRepositoryError::DuplicatePending)
        }

        async fn accept_request(&self, _id: Uuid) -> Result<bool, FriendshipRepositoryError> {
            unimplemented!("Not used in this test")
        }

        async fn reject_request(&self, _id: Uuid) -> Result<bool, FriendshipRepositoryError> {
            unimplemented!("Not used in this test")
        }
    }

    #[tokio::test]
    async fn unique_index_violation_maps_to_duplicate() {
        let users = InMemoryUsers::default();
        let a = users.add("ana").await;
        let b = users.add("ben").await;
        let service =
            SendFriendRequestService::new(InMemorySocialGraph::default(), RacingRepository, users);

        let result = service.execute(UserId::from(a), b).await;

        assert!(matches!(result, Err(SendFriendRequestError::DuplicateRequest)));
    }
}
