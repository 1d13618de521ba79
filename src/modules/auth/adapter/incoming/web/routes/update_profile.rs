use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

/// Profile edit. Omitted fields are left alone; an empty phone or
/// profileImage removes it.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[schema(example = "Ana Lopez")]
    pub full_name: Option<String>,

    #[schema(example = "+62 812 3456 7890")]
    pub phone: Option<String>,

    pub profile_image: Option<String>,
}

fn map_command_error(err: UpdateProfileCommandError) -> HttpResponse {
    let code = match err {
        UpdateProfileCommandError::NothingToUpdate => "NOTHING_TO_UPDATE",
        UpdateProfileCommandError::EmptyFullName | UpdateProfileCommandError::FullNameTooLong => {
            "INVALID_FULL_NAME"
        }
        UpdateProfileCommandError::PhoneTooLong => "INVALID_PHONE",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

/// Edit own profile
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserProfile>)),
        (status = 400, description = "Empty or invalid edit", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/me")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match UpdateProfileCommand::new(req.full_name, req.phone, req.profile_image) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.auth.update_profile.execute(user.id(), command).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(UpdateProfileError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Profile edit for a missing account");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to update profile");
            ApiResponse::internal_error()
        }
    }
}
