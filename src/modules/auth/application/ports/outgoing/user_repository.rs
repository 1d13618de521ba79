use async_trait::async_trait;
use uuid::Uuid;

use super::user_query::UserQueryResult;

/// Input for inserting a new account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub invitation_code: Option<String>,
    pub is_staff: bool,
    pub is_verified: bool,
}

/// Partial profile write. `None` leaves a column untouched; `Some(None)` clears a
/// nullable one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub full_name: Option<String>,
    pub phone: Option<Option<String>>,
    pub profile_image: Option<Option<String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData)
        -> Result<UserQueryResult, UserRepositoryError>;

    /// Stamps `updated_at`. `Ok(None)` when no account has `user_id`.
    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Option<UserQueryResult>, UserRepositoryError>;
}
