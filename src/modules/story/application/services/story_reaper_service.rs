use async_trait::async_trait;
use tracing::{debug, info};

use crate::shared::clock::Clock;
use crate::story::application::ports::{
    incoming::use_cases::{ReapExpiredStoriesUseCase, ReapStoriesError},
    outgoing::StoryRepository,
};

#[derive(Debug, Clone)]
pub struct StoryReaperService<R, C>
where
    R: StoryRepository + Send + Sync,
    C: Clock,
{
    repository: R,
    clock: C,
}

impl<R, C> StoryReaperService<R, C>
where
    R: StoryRepository + Send + Sync,
    C: Clock,
{
    pub fn new(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R, C> ReapExpiredStoriesUseCase for StoryReaperService<R, C>
where
    R: StoryRepository + Send + Sync,
    C: Clock,
{
    async fn execute(&self) -> Result<u64, ReapStoriesError> {
        let now = self.clock.now();
        let removed = self
            .repository
            .delete_expired(now)
            .await
            .map_err(|e| ReapStoriesError::RepositoryError(e.to_string()))?;

        if removed > 0 {
            info!(removed, cutoff = %now, "Expired stories reaped");
        } else {
            debug!(cutoff = %now, "No expired stories");
        }

        Ok(removed)
    }
}
