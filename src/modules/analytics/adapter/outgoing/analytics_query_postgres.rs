use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::analytics_snapshots::{
    Column as SnapshotColumn, Entity as SnapshotEntity,
};
use crate::analytics::application::domain::entities::AnalyticsSnapshot;
use crate::analytics::application::ports::outgoing::{AnalyticsQuery, AnalyticsQueryError};

#[derive(Clone, Debug)]
pub struct AnalyticsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AnalyticsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> AnalyticsQueryError {
    AnalyticsQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl AnalyticsQuery for AnalyticsQueryPostgres {
    async fn list_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<AnalyticsSnapshot>, AnalyticsQueryError> {
        let rows = SnapshotEntity::find()
            .filter(SnapshotColumn::Date.gte(since))
            .order_by_desc(SnapshotColumn::Date)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn latest(&self) -> Result<Option<AnalyticsSnapshot>, AnalyticsQueryError> {
        let row = SnapshotEntity::find()
            .order_by_desc(SnapshotColumn::Date)
            .order_by_desc(SnapshotColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(|m| m.to_domain()))
    }
}
