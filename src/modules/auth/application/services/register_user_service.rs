use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::{
    incoming::use_cases::{
        AuthSession, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
    },
    outgoing::{CreateUserData, PasswordHasher, TokenProvider, UserRepository, UserRepositoryError},
};

/// Creates the account and signs the caller in.
///
/// Accounts are created verified; there is no email confirmation step.
#[derive(Clone)]
pub struct RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<AuthSession, RegisterUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            username: command.username().to_string(),
            email: command.email().to_string(),
            password_hash,
            full_name: command.full_name().to_string(),
            phone: command.phone().cloned(),
            profile_image: command.profile_image().cloned(),
            invitation_code: command.invitation_code().cloned(),
            is_staff: false,
            is_verified: true,
        };

        let user = self
            .repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                UserRepositoryError::UsernameAlreadyExists => {
                    RegisterUserError::UsernameAlreadyExists
                }
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .token_provider
            .issue_token(user.id, &user.email, &user.username)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "User registered");

        Ok(AuthSession {
            token,
            user: user.to_profile(),
        })
    }
}
