use async_trait::async_trait;
use email_address::EmailAddress;

use super::register_user::AuthSession;

// ========================= Login Command =========================

/// Validated login input. Email is trimmed and lowercased.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginCommandError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginCommandError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Login Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError>;
}
