use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::analytics_snapshots::ActiveModel as SnapshotActiveModel;
use crate::analytics::application::domain::entities::AnalyticsSnapshot;
use crate::analytics::application::ports::outgoing::{
    AnalyticsRepository, AnalyticsRepositoryError, NewSnapshot,
};

#[derive(Clone, Debug)]
pub struct AnalyticsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AnalyticsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnalyticsRepository for AnalyticsRepositoryPostgres {
    async fn record(
        &self,
        snapshot: NewSnapshot,
    ) -> Result<AnalyticsSnapshot, AnalyticsRepositoryError> {
        let active = SnapshotActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(snapshot.date.into()),
            visitors: Set(snapshot.visitors),
            earnings: Set(snapshot.earnings),
            orders: Set(snapshot.orders),
            revenue: Set(snapshot.revenue),
            created_at: Set(chrono::Utc::now().into()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| AnalyticsRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }
}
