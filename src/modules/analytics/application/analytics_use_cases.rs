use std::sync::Arc;

use crate::analytics::application::ports::incoming::use_cases::{
    LatestAnalyticsUseCase, ListAnalyticsUseCase, RecordAnalyticsUseCase,
};

#[derive(Clone)]
pub struct AnalyticsUseCases {
    pub list: Arc<dyn ListAnalyticsUseCase + Send + Sync>,
    pub latest: Arc<dyn LatestAnalyticsUseCase + Send + Sync>,
    pub record: Arc<dyn RecordAnalyticsUseCase + Send + Sync>,
}
