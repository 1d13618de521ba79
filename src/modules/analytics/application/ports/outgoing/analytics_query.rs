use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analytics::application::domain::entities::AnalyticsSnapshot;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyticsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AnalyticsQuery: Send + Sync {
    /// Snapshots dated at or after `since`, most recent first.
    async fn list_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<AnalyticsSnapshot>, AnalyticsQueryError>;

    async fn latest(&self) -> Result<Option<AnalyticsSnapshot>, AnalyticsQueryError>;
}
