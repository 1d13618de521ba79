use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    /// The stored PHC string could not be parsed or uses unsupported parameters.
    #[error("Stored password hash is unusable")]
    UnusableHash,

    #[error("Hashing worker did not complete")]
    WorkerFailed,
}

/// Credential hashing for registration, login and the staff bootstrap.
///
/// Implementations run the hash off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` means a wrong password.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
