use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::incoming::use_cases::GetCurrentUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, warn};

/// Current account
///
/// Returns the profile of the user the bearer token was issued for.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile of the caller", body = inline(SuccessResponse<UserProfile>)),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.current_user.execute(user.id()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetCurrentUserError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Token refers to a missing account");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetCurrentUserError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load current user");
            ApiResponse::internal_error()
        }
    }
}
