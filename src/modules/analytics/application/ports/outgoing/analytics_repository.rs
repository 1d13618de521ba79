use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analytics::application::domain::entities::AnalyticsSnapshot;

#[derive(Debug, Clone)]
pub struct NewSnapshot {
    pub date: DateTime<Utc>,
    pub visitors: i64,
    pub earnings: i64,
    pub orders: i64,
    pub revenue: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyticsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn record(
        &self,
        snapshot: NewSnapshot,
    ) -> Result<AnalyticsSnapshot, AnalyticsRepositoryError>;
}
