use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::analytics::application::domain::entities::AnalyticsSnapshot;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "analytics_snapshots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: DateTimeWithTimeZone,
    pub visitors: i64,
    pub earnings: i64,
    pub orders: i64,
    pub revenue: i64,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            id: self.id,
            date: self.date.with_timezone(&chrono::Utc),
            visitors: self.visitors,
            earnings: self.earnings,
            orders: self.orders,
            revenue: self.revenue,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
