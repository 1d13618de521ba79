use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReapStoriesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Deletes expired stories. Returns the number removed; zero is not an error.
#[async_trait]
pub trait ReapExpiredStoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<u64, ReapStoriesError>;
}
