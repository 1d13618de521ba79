use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analytics::application::domain::entities::AnalyticsSnapshot;
use crate::auth::application::domain::entities::UserId;

pub const DEFAULT_ANALYTICS_DAYS: u64 = 30;
pub const MAX_ANALYTICS_DAYS: u64 = 365;

#[derive(Debug, Clone)]
pub struct RecordSnapshotCommand {
    date: Option<DateTime<Utc>>,
    visitors: i64,
    earnings: i64,
    orders: i64,
    revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordSnapshotCommandError {
    #[error("{0} must not be negative")]
    Negative(&'static str),
}

impl RecordSnapshotCommand {
    /// A missing `date` means "now" when the snapshot is recorded.
    pub fn new(
        date: Option<DateTime<Utc>>,
        visitors: i64,
        earnings: i64,
        orders: i64,
        revenue: i64,
    ) -> Result<Self, RecordSnapshotCommandError> {
        for (name, value) in [
            ("visitors", visitors),
            ("earnings", earnings),
            ("orders", orders),
            ("revenue", revenue),
        ] {
            if value < 0 {
                return Err(RecordSnapshotCommandError::Negative(name));
            }
        }

        Ok(Self {
            date,
            visitors,
            earnings,
            orders,
            revenue,
        })
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn visitors(&self) -> i64 {
        self.visitors
    }

    pub fn earnings(&self) -> i64 {
        self.earnings
    }

    pub fn orders(&self) -> i64 {
        self.orders
    }

    pub fn revenue(&self) -> i64 {
        self.revenue
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Access denied")]
    AccessDenied,

    #[error("No analytics recorded yet")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// All analytics operations are staff only.
#[async_trait]
pub trait ListAnalyticsUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        days: u64,
    ) -> Result<Vec<AnalyticsSnapshot>, AnalyticsError>;
}

#[async_trait]
pub trait LatestAnalyticsUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<AnalyticsSnapshot, AnalyticsError>;
}

#[async_trait]
pub trait RecordAnalyticsUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        command: RecordSnapshotCommand,
    ) -> Result<AnalyticsSnapshot, AnalyticsError>;
}
