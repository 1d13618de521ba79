use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One append-only rollup. Money fields are in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub visitors: i64,
    pub earnings: i64,
    pub orders: i64,
    pub revenue: i64,
    pub created_at: DateTime<Utc>,
}
