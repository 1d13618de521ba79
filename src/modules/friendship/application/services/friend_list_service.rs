use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::friendship::application::ports::{
    incoming::use_cases::{CheckFriendshipUseCase, FriendsQueryError, ListFriendsUseCase},
    outgoing::FriendshipQuery,
};

#[derive(Debug, Clone)]
pub struct FriendListService<Q, U>
where
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    query: Q,
    users: U,
}

impl<Q, U> FriendListService<Q, U>
where
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

#[async_trait]
impl<Q, U> ListFriendsUseCase for FriendListService<Q, U>
where
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<Vec<UserSummary>, FriendsQueryError> {
        let ids = self
            .query
            .friend_ids(user.value())
            .await
            .map_err(|e| FriendsQueryError::QueryError(e.to_string()))?;

        // Rows written before pairs were canonicalized may exist in both orientations.
        let mut seen = HashSet::new();
        let ids: Vec<Uuid> = ids.into_iter().filter(|id| seen.insert(*id)).collect();

        let summaries = self
            .users
            .summaries_by_id(&ids)
            .await
            .map_err(|e| FriendsQueryError::QueryError(e.to_string()))?;

        Ok(ids
            .iter()
            .filter_map(|id| summaries.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl<Q, U> CheckFriendshipUseCase for FriendListService<Q, U>
where
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, user: UserId, other: Uuid) -> Result<bool, FriendsQueryError> {
        if user.value() == other {
            return Ok(false);
        }

        self.query
            .are_friends(user.value(), other)
            .await
            .map_err(|e| FriendsQueryError::QueryError(e.to_string()))
    }
}
