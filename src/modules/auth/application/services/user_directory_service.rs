use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::PublicUser,
    ports::{
        incoming::use_cases::{
            GetUserUseCase, ListUsersUseCase, UserDirectoryError, MAX_USER_LIST_LIMIT,
        },
        outgoing::UserQuery,
    },
};

/// Read-only member directory.
#[derive(Debug, Clone)]
pub struct UserDirectoryService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> UserDirectoryService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for UserDirectoryService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, limit: u64) -> Result<Vec<PublicUser>, UserDirectoryError> {
        let rows = self
            .query
            .list_users(limit.min(MAX_USER_LIST_LIMIT))
            .await
            .map_err(|e| UserDirectoryError::QueryError(e.to_string()))?;

        Ok(rows.iter().map(|row| row.to_public()).collect())
    }
}

#[async_trait]
impl<Q> GetUserUseCase for UserDirectoryService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, UserDirectoryError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| UserDirectoryError::QueryError(e.to_string()))?
            .map(|row| row.to_public())
            .ok_or(UserDirectoryError::UserNotFound)
    }
}
