use async_trait::async_trait;
use chrono::Duration;
use tracing::{info, warn};

use crate::analytics::application::domain::entities::AnalyticsSnapshot;
use crate::analytics::application::ports::{
    incoming::use_cases::{
        AnalyticsError, LatestAnalyticsUseCase, ListAnalyticsUseCase, RecordAnalyticsUseCase,
        RecordSnapshotCommand,
    },
    outgoing::{AnalyticsQuery, AnalyticsRepository, NewSnapshot},
};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::shared::clock::Clock;

/// Staff-only access to analytics snapshots.
#[derive(Debug, Clone)]
pub struct AnalyticsService<Q, R, U, C>
where
    Q: AnalyticsQuery + Send + Sync,
    R: AnalyticsRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    query: Q,
    repository: R,
    users: U,
    clock: C,
}

impl<Q, R, U, C> AnalyticsService<Q, R, U, C>
where
    Q: AnalyticsQuery + Send + Sync,
    R: AnalyticsRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    pub fn new(query: Q, repository: R, users: U, clock: C) -> Self {
        Self {
            query,
            repository,
            users,
            clock,
        }
    }

    /// Unknown users are treated like non-staff.
    async fn require_staff(&self, user: UserId) -> Result<(), AnalyticsError> {
        let is_staff = self
            .users
            .find_by_id(user.value())
            .await
            .map_err(|e| AnalyticsError::RepositoryError(e.to_string()))?
            .is_some_and(|u| u.is_staff);

        if !is_staff {
            warn!(user_id = %user, "Analytics access denied");
            return Err(AnalyticsError::AccessDenied);
        }
        Ok(())
    }
}

#[async_trait]
impl<Q, R, U, C> ListAnalyticsUseCase for AnalyticsService<Q, R, U, C>
where
    Q: AnalyticsQuery + Send + Sync,
    R: AnalyticsRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    async fn execute(
        &self,
        user: UserId,
        days: u64,
    ) -> Result<Vec<AnalyticsSnapshot>, AnalyticsError> {
        self.require_staff(user).await?;

        let since = self.clock.now() - Duration::days(days as i64);
        self.query
            .list_since(since)
            .await
            .map_err(|e| AnalyticsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<Q, R, U, C> LatestAnalyticsUseCase for AnalyticsService<Q, R, U, C>
where
    Q: AnalyticsQuery + Send + Sync,
    R: AnalyticsRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    async fn execute(&self, user: UserId) -> Result<AnalyticsSnapshot, AnalyticsError> {
        self.require_staff(user).await?;

        self.query
            .latest()
            .await
            .map_err(|e| AnalyticsError::RepositoryError(e.to_string()))?
            .ok_or(AnalyticsError::NotFound)
    }
}

#[async_trait]
impl<Q, R, U, C> RecordAnalyticsUseCase for AnalyticsService<Q, R, U, C>
where
    Q: AnalyticsQuery + Send + Sync,
    R: AnalyticsRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    async fn execute(
        &self,
        user: UserId,
        command: RecordSnapshotCommand,
    ) -> Result<AnalyticsSnapshot, AnalyticsError> {
        self.require_staff(user).await?;

        let snapshot = self
            .repository
            .record(NewSnapshot {
                date: command.date().unwrap_or_else(|| self.clock.now()),
                visitors: command.visitors(),
                earnings: command.earnings(),
                orders: command.orders(),
                revenue: command.revenue(),
            })
            .await
            .map_err(|e| AnalyticsError::RepositoryError(e.to_string()))?;

        info!(snapshot_id = %snapshot.id, recorded_by = %user, "Analytics snapshot recorded");
        Ok(snapshot)
    }
}
