pub mod analytics_query;
pub mod analytics_repository;

pub use analytics_query::{AnalyticsQuery, AnalyticsQueryError};
pub use analytics_repository::{AnalyticsRepository, AnalyticsRepositoryError, NewSnapshot};
