use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

/// Credentials for the staff account provisioned at boot.
#[derive(Debug, Clone)]
pub struct StaffAccountSpec {
    pub email: String,
    pub password: String,
    pub username: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffBootstrapOutcome {
    Created(Uuid),
    AlreadyPresent(Uuid),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StaffBootstrapError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Username already taken by another account")]
    UsernameTaken,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Idempotent: a second run with the same email is a no-op.
pub struct StaffAccountBootstrap<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> StaffAccountBootstrap<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    pub async fn ensure(
        &self,
        spec: &StaffAccountSpec,
    ) -> Result<StaffBootstrapOutcome, StaffBootstrapError> {
        let email = spec.email.trim().to_lowercase();

        if let Some(existing) = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| StaffBootstrapError::Storage(e.to_string()))?
        {
            if !existing.is_staff {
                warn!(user_id = %existing.id, "Bootstrap email belongs to a non-staff account");
            }
            return Ok(StaffBootstrapOutcome::AlreadyPresent(existing.id));
        }

        let password_hash = self
            .password_hasher
            .hash_password(&spec.password)
            .await
            .map_err(|e| StaffBootstrapError::HashingFailed(e.to_string()))?;

        let created = self
            .repository
            .create_user(CreateUserData {
                username: spec.username.clone(),
                email,
                password_hash,
                full_name: spec.full_name.clone(),
                phone: None,
                profile_image: None,
                invitation_code: None,
                is_staff: true,
                is_verified: true,
            })
            .await;

        match created {
            Ok(user) => {
                info!(user_id = %user.id, "Staff account created");
                Ok(StaffBootstrapOutcome::Created(user.id))
            }
            Err(UserRepositoryError::UsernameAlreadyExists) => Err(StaffBootstrapError::UsernameTaken),
            Err(e) => Err(StaffBootstrapError::Storage(e.to_string())),
        }
    }
}
