use crate::analytics::application::domain::entities::AnalyticsSnapshot;
use crate::analytics::application::ports::incoming::use_cases::{
    AnalyticsError, RecordSnapshotCommand, DEFAULT_ANALYTICS_DAYS, MAX_ANALYTICS_DAYS,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::clamp_limit;
use crate::AppState;
use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AnalyticsWindowQuery {
    /// Look-back window in days. Defaults to 30.
    pub days: Option<u64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordSnapshotDto {
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub visitors: i64,
    /// Cents.
    #[serde(default)]
    pub earnings: i64,
    #[serde(default)]
    pub orders: i64,
    /// Cents.
    #[serde(default)]
    pub revenue: i64,
}

fn analytics_error_response(e: AnalyticsError, user: &AuthenticatedUser) -> HttpResponse {
    match e {
        AnalyticsError::AccessDenied => ApiResponse::forbidden("FORBIDDEN", "Access denied"),
        AnalyticsError::NotFound => {
            ApiResponse::not_found("ANALYTICS_NOT_FOUND", "No analytics recorded yet")
        }
        AnalyticsError::RepositoryError(msg) => {
            error!(user_id = %user.user_id, error = %msg, "Analytics operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Snapshots in the look-back window, most recent first
#[utoipa::path(
    get,
    path = "/api/analytics",
    tag = "analytics",
    params(AnalyticsWindowQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Snapshots by date descending", body = inline(SuccessResponse<Vec<AnalyticsSnapshot>>)),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/analytics")]
pub async fn list_analytics_handler(
    user: AuthenticatedUser,
    query: web::Query<AnalyticsWindowQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let days = clamp_limit(query.days, DEFAULT_ANALYTICS_DAYS, MAX_ANALYTICS_DAYS);

    match data.analytics.list.execute(user.id(), days).await {
        Ok(snapshots) => ApiResponse::success(snapshots),
        Err(e) => analytics_error_response(e, &user),
    }
}

#[utoipa::path(
    get,
    path = "/api/analytics/latest",
    tag = "analytics",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Most recent snapshot", body = inline(SuccessResponse<AnalyticsSnapshot>)),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Nothing recorded yet", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/analytics/latest")]
pub async fn latest_analytics_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.analytics.latest.execute(user.id()).await {
        Ok(snapshot) => ApiResponse::success(snapshot),
        Err(e) => analytics_error_response(e, &user),
    }
}

/// Record a snapshot
///
/// `date` defaults to the time of recording.
#[utoipa::path(
    post,
    path = "/api/analytics",
    tag = "analytics",
    request_body = RecordSnapshotDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Recorded", body = inline(SuccessResponse<AnalyticsSnapshot>)),
        (status = 400, description = "Negative figures", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/analytics")]
pub async fn record_analytics_handler(
    user: AuthenticatedUser,
    body: web::Json<RecordSnapshotDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();
    let command = match RecordSnapshotCommand::new(
        dto.date,
        dto.visitors,
        dto.earnings,
        dto.orders,
        dto.revenue,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.analytics.record.execute(user.id(), command).await {
        Ok(snapshot) => ApiResponse::created(snapshot),
        Err(e) => analytics_error_response(e, &user),
    }
}
