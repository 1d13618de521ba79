use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::ports::incoming::use_cases::{
    UserDirectoryError, DEFAULT_USER_LIST_LIMIT,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::clamp_limit;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::application::ports::incoming::use_cases::MAX_USER_LIST_LIMIT;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UserListQuery {
    /// Defaults to 50
    pub limit: Option<u64>,
}

/// Member directory
///
/// Newest accounts first. Contact details are not included.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(UserListQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Members", body = inline(SuccessResponse<Vec<PublicUser>>)),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users")]
pub async fn list_users_handler(
    _user: AuthenticatedUser,
    query: web::Query<UserListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let limit = clamp_limit(query.limit, DEFAULT_USER_LIST_LIMIT, MAX_USER_LIST_LIMIT);

    match data.auth.list_users.execute(limit).await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}

/// Single member
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Member", body = inline(SuccessResponse<PublicUser>)),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{id}")]
pub async fn get_user_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.auth.get_user.execute(user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(UserDirectoryError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UserDirectoryError::QueryError(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load user");
            ApiResponse::internal_error()
        }
    }
}
