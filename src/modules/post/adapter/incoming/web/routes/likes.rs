use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::post::application::domain::entities::{Like, LikeTarget};
use crate::post::application::ports::incoming::use_cases::LikeError;
use crate::shared::api::{ApiResponse, MessageBody};
use crate::AppState;
use actix_web::{delete, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Exactly one of `postId` / `commentId`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequestDto {
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
}

fn target_not_found(target: LikeTarget) -> HttpResponse {
    match target {
        LikeTarget::Post(_) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        LikeTarget::Comment(_) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
    }
}

/// Like a post or a comment
#[utoipa::path(
    post,
    path = "/api/likes",
    tag = "likes",
    request_body = LikeRequestDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Liked", body = inline(SuccessResponse<Like>)),
        (status = 400, description = "Neither or both target ids given", body = ErrorResponse),
        (status = 404, description = "Target does not exist", body = ErrorResponse),
        (status = 409, description = "Already liked", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/likes")]
pub async fn like_handler(
    user: AuthenticatedUser,
    body: web::Json<LikeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = match LikeTarget::from_ids(body.post_id, body.comment_id) {
        Ok(target) => target,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.post.like.execute(user.id(), target).await {
        Ok(like) => ApiResponse::created(like),
        Err(LikeError::AlreadyLiked) => ApiResponse::conflict("ALREADY_LIKED", "Already liked"),
        Err(LikeError::TargetNotFound) => target_not_found(target),
        Err(e) => {
            error!(user_id = %user.user_id, ?target, error = %e, "Failed to like");
            ApiResponse::internal_error()
        }
    }
}

/// Remove the caller's like
#[utoipa::path(
    delete,
    path = "/api/likes",
    tag = "likes",
    request_body = LikeRequestDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Unliked", body = inline(SuccessResponse<MessageBody>)),
        (status = 400, description = "Neither or both target ids given", body = ErrorResponse),
        (status = 404, description = "The caller had not liked the target", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/likes")]
pub async fn unlike_handler(
    user: AuthenticatedUser,
    body: web::Json<LikeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = match LikeTarget::from_ids(body.post_id, body.comment_id) {
        Ok(target) => target,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.post.unlike.execute(user.id(), target).await {
        Ok(()) => ApiResponse::message("Like removed"),
        Err(LikeError::LikeNotFound) => ApiResponse::not_found("LIKE_NOT_FOUND", "Like not found"),
        Err(LikeError::TargetNotFound) => target_not_found(target),
        Err(e) => {
            error!(user_id = %user.user_id, ?target, error = %e, "Failed to unlike");
            ApiResponse::internal_error()
        }
    }
}
