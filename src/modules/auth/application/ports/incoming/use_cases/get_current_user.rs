use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Resolves the bearer of a verified token to their stored profile.
#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, GetCurrentUserError>;
}
