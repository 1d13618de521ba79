use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::PublicUser;

pub const DEFAULT_USER_LIST_LIMIT: u64 = 50;
pub const MAX_USER_LIST_LIMIT: u64 = 200;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserDirectoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, limit: u64) -> Result<Vec<PublicUser>, UserDirectoryError>;
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, UserDirectoryError>;
}
