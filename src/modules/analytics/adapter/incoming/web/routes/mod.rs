mod analytics;

pub use analytics::{
    latest_analytics_handler, list_analytics_handler, record_analytics_handler,
    AnalyticsWindowQuery, RecordSnapshotDto,
};
pub use analytics::{__path_latest_analytics_handler, __path_list_analytics_handler, __path_record_analytics_handler};
