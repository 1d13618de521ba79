use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipStatusResponse {
    pub user_id: Uuid,
    pub are_friends: bool,
}

/// Friends of the caller
#[utoipa::path(
    get,
    path = "/api/friends",
    tag = "friends",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Each friend once", body = inline(SuccessResponse<Vec<UserSummary>>)),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/friends")]
pub async fn list_friends_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.friendship.list_friends.execute(user.id()).await {
        Ok(friends) => ApiResponse::success(friends),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list friends");
            ApiResponse::internal_error()
        }
    }
}

/// Is the caller friends with `userId`?
#[utoipa::path(
    get,
    path = "/api/friends/{userId}/status",
    tag = "friends",
    params(("userId" = Uuid, Path, description = "Other user")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Friendship flag", body = inline(SuccessResponse<FriendshipStatusResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/friends/{user_id}/status")]
pub async fn friendship_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let other = path.into_inner();

    match data
        .friendship
        .check_friendship
        .execute(user.id(), other)
        .await
    {
        Ok(are_friends) => ApiResponse::success(FriendshipStatusResponse {
            user_id: other,
            are_friends,
        }),
        Err(e) => {
            error!(user_id = %user.user_id, other_id = %other, error = %e, "Failed to check friendship");
            ApiResponse::internal_error()
        }
    }
}
