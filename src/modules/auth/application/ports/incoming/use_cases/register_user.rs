use std::sync::OnceLock;

use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;

use crate::auth::application::domain::entities::UserProfile;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    password: String,
    full_name: String,
    phone: Option<String>,
    profile_image: Option<String>,
    invitation_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Username must be 3-50 characters of letters, digits, '_' or '.'")]
    InvalidUsername,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Full name cannot be empty")]
    EmptyFullName,

    #[error("Full name must not exceed 100 characters")]
    FullNameTooLong,
}

fn is_valid_username(username: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_.]{3,50}$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(username))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        email: String,
        password: String,
        full_name: String,
        phone: Option<String>,
        profile_image: Option<String>,
        invitation_code: Option<String>,
    ) -> Result<Self, RegisterUserCommandError> {
        let username = username.trim();
        if !is_valid_username(username) {
            return Err(RegisterUserCommandError::InvalidUsername);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmail);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegisterUserCommandError::PasswordTooShort);
        }

        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(RegisterUserCommandError::EmptyFullName);
        }
        if full_name.chars().count() > 100 {
            return Err(RegisterUserCommandError::FullNameTooLong);
        }

        Ok(Self {
            username: username.to_string(),
            email,
            password,
            full_name: full_name.to_string(),
            phone: non_blank(phone),
            profile_image: non_blank(profile_image),
            invitation_code: non_blank(invitation_code),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn phone(&self) -> Option<&String> {
        self.phone.as_ref()
    }

    pub fn profile_image(&self) -> Option<&String> {
        self.profile_image.as_ref()
    }

    pub fn invitation_code(&self) -> Option<&String> {
        self.invitation_code.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Output / Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<AuthSession, RegisterUserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<RegisterUserCommand, RegisterUserCommandError> {
        RegisterUserCommand::new(
            username.to_string(),
            email.to_string(),
            password.to_string(),
            full_name.to_string(),
            None,
            None,
            None,
        )
    }

    #[test]
    fn valid_command_normalizes_email_and_trims_names() {
        let cmd = command(" ana_l ", " Ana@Example.COM ", "longenough", "  Ana Lopez ").unwrap();

        assert_eq!(cmd.username(), "ana_l");
        assert_eq!(cmd.email(), "ana@example.com");
        assert_eq!(cmd.full_name(), "Ana Lopez");
    }

    #[test]
    fn rejects_bad_usernames() {
        let too_long = "x".repeat(51);
        for bad in ["ab", "has space", "emoji🙂", too_long.as_str()] {
            assert_eq!(
                command(bad, "a@x.com", "longenough", "Ana").unwrap_err(),
                RegisterUserCommandError::InvalidUsername,
                "username {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn rejects_invalid_email() {
        assert_eq!(
            command("ana", "not-an-email", "longenough", "Ana").unwrap_err(),
            RegisterUserCommandError::InvalidEmail
        );
    }

    #[test]
    fn rejects_short_password() {
        assert_eq!(
            command("ana", "a@x.com", "short", "Ana").unwrap_err(),
            RegisterUserCommandError::PasswordTooShort
        );
    }

    #[test]
    fn rejects_blank_full_name() {
        assert_eq!(
            command("ana", "a@x.com", "longenough", "   ").unwrap_err(),
            RegisterUserCommandError::EmptyFullName
        );
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let cmd = RegisterUserCommand::new(
            "ana".to_string(),
            "a@x.com".to_string(),
            "longenough".to_string(),
            "Ana".to_string(),
            Some("  ".to_string()),
            Some("https://cdn/a.png".to_string()),
            Some("".to_string()),
        )
        .unwrap();

        assert!(cmd.phone().is_none());
        assert_eq!(cmd.profile_image().map(String::as_str), Some("https://cdn/a.png"));
        assert!(cmd.invitation_code().is_none());
    }
}
