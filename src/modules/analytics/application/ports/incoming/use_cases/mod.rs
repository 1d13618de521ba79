mod analytics;

pub use analytics::{
    AnalyticsError, LatestAnalyticsUseCase, ListAnalyticsUseCase, RecordAnalyticsUseCase,
    RecordSnapshotCommand, RecordSnapshotCommandError, DEFAULT_ANALYTICS_DAYS,
    MAX_ANALYTICS_DAYS,
};
