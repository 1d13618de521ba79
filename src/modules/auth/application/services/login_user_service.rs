use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::{
    incoming::use_cases::{AuthSession, LoginCommand, LoginError, LoginUserUseCase},
    outgoing::{PasswordHasher, TokenProvider, UserQuery},
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError> {
        // Unknown email and wrong password are indistinguishable to the caller
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .issue_token(user.id, &user.email, &user.username)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession {
            token,
            user: user.to_profile(),
        })
    }
}
