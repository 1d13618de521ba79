use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::{
        incoming::use_cases::{GetCurrentUserError, GetCurrentUserUseCase},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCurrentUserUseCase for GetCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, GetCurrentUserError> {
        self.query
            .find_by_id(user_id.value())
            .await
            .map_err(|e| GetCurrentUserError::QueryError(e.to_string()))?
            .map(|user| user.to_profile())
            .ok_or(GetCurrentUserError::UserNotFound)
    }
}
