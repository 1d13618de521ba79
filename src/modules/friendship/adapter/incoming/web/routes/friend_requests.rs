use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::friendship::application::domain::entities::{
    FriendRequest, FriendRequestDecision, FriendRequestStatus, IncomingFriendRequest,
    OutgoingFriendRequest,
};
use crate::friendship::application::ports::incoming::use_cases::{
    RespondFriendRequestError, SendFriendRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendFriendRequestDto {
    pub receiver_id: Uuid,
}

/// Outcome of accepting or rejecting a request.
#[derive(Debug, Serialize, ToSchema)]
pub struct FriendRequestResolution {
    pub id: Uuid,
    pub status: FriendRequestStatus,
}

/// Send a friend request
#[utoipa::path(
    post,
    path = "/api/friend-requests",
    tag = "friends",
    request_body = SendFriendRequestDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Request created", body = inline(SuccessResponse<FriendRequest>)),
        (status = 400, description = "Request to self or malformed body", body = ErrorResponse),
        (status = 404, description = "Receiver does not exist", body = ErrorResponse),
        (
            status = 409,
            description = "Already friends or a pending request exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "REQUEST_ALREADY_EXISTS", "message": "Friend request already sent" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/friend-requests")]
pub async fn send_friend_request_handler(
    user: AuthenticatedUser,
    body: web::Json<SendFriendRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let receiver_id = body.receiver_id;

    match data
        .friendship
        .send_request
        .execute(user.id(), receiver_id)
        .await
    {
        Ok(request) => ApiResponse::created(request),
        Err(SendFriendRequestError::CannotBefriendSelf) => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "You cannot send a friend request to yourself",
        ),
        Err(SendFriendRequestError::ReceiverNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(SendFriendRequestError::DuplicateRequest) => {
            ApiResponse::conflict("REQUEST_ALREADY_EXISTS", "Friend request already sent")
        }
        Err(SendFriendRequestError::AlreadyFriends) => {
            ApiResponse::conflict("ALREADY_FRIENDS", "You are already friends")
        }
        Err(SendFriendRequestError::RepositoryError(e)) => {
            error!(
                sender_id = %user.user_id,
                receiver_id = %receiver_id,
                error = %e,
                "Failed to send friend request"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Pending requests addressed to the caller
#[utoipa::path(
    get,
    path = "/api/friend-requests",
    tag = "friends",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Newest first, with sender", body = inline(SuccessResponse<Vec<IncomingFriendRequest>>)),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/friend-requests")]
pub async fn list_incoming_requests_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.friendship.incoming_requests.execute(user.id()).await {
        Ok(requests) => ApiResponse::success(requests),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list friend requests");
            ApiResponse::internal_error()
        }
    }
}

/// Pending requests the caller has sent
#[utoipa::path(
    get,
    path = "/api/friend-requests/sent",
    tag = "friends",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Newest first, with receiver", body = inline(SuccessResponse<Vec<OutgoingFriendRequest>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/friend-requests/sent")]
pub async fn list_outgoing_requests_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.friendship.outgoing_requests.execute(user.id()).await {
        Ok(requests) => ApiResponse::success(requests),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list sent friend requests");
            ApiResponse::internal_error()
        }
    }
}

async fn respond(
    user: AuthenticatedUser,
    request_id: Uuid,
    decision: FriendRequestDecision,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data
        .friendship
        .respond
        .execute(request_id, user.id(), decision)
        .await
    {
        Ok(status) => ApiResponse::success(FriendRequestResolution {
            id: request_id,
            status,
        }),
        Err(RespondFriendRequestError::NotFound) => {
            ApiResponse::not_found("REQUEST_NOT_FOUND", "Friend request not found")
        }
        Err(RespondFriendRequestError::NotReceiver) => {
            warn!(request_id = %request_id, user_id = %user.user_id, "Friend request response refused");
            ApiResponse::forbidden(
                "FORBIDDEN",
                "Only the receiver can respond to this friend request",
            )
        }
        Err(e @ RespondFriendRequestError::AlreadyResolved(_)) => {
            ApiResponse::conflict("REQUEST_ALREADY_RESOLVED", &e.to_string())
        }
        Err(RespondFriendRequestError::RepositoryError(e)) => {
            error!(request_id = %request_id, error = %e, "Failed to resolve friend request");
            ApiResponse::internal_error()
        }
    }
}

/// Accept a friend request
///
/// Only the receiver may accept. Creates the friendship in the same transaction.
#[utoipa::path(
    post,
    path = "/api/friend-requests/{id}/accept",
    tag = "friends",
    params(("id" = Uuid, Path, description = "Friend request id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Accepted", body = inline(SuccessResponse<FriendRequestResolution>)),
        (status = 403, description = "Caller is not the receiver", body = ErrorResponse),
        (status = 404, description = "No such request", body = ErrorResponse),
        (status = 409, description = "Already accepted or rejected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/friend-requests/{id}/accept")]
pub async fn accept_friend_request_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(user, path.into_inner(), FriendRequestDecision::Accept, data).await
}

/// Reject a friend request
#[utoipa::path(
    post,
    path = "/api/friend-requests/{id}/reject",
    tag = "friends",
    params(("id" = Uuid, Path, description = "Friend request id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Rejected", body = inline(SuccessResponse<FriendRequestResolution>)),
        (status = 403, description = "Caller is not the receiver", body = ErrorResponse),
        (status = 404, description = "No such request", body = ErrorResponse),
        (status = 409, description = "Already accepted or rejected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/friend-requests/{id}/reject")]
pub async fn reject_friend_request_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(user, path.into_inner(), FriendRequestDecision::Reject, data).await
}
