use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::post::application::domain::entities::PostWithAuthor;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, DeletePostError, PostFeedError, DEFAULT_POST_PAGE_SIZE,
    MAX_POST_PAGE_SIZE,
};
use crate::shared::api::{ApiResponse, MessageBody};
use crate::shared::pagination::{clamp_limit, PageQuery, PageRequest};
use crate::AppState;
use actix_web::{delete, get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    pub content: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

/// Publish a post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = CreatePostDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Post created with its author", body = inline(SuccessResponse<PostWithAuthor>)),
        (status = 400, description = "Empty or oversized content", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 404, description = "Author account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    body: web::Json<CreatePostDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();
    let command = match CreatePostCommand::new(dto.content, dto.image_url, dto.video_url) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.post.create_post.execute(user.id(), command).await {
        Ok(post) => {
            info!(post_id = %post.post.id, author_id = %user.user_id, "Post created");
            ApiResponse::created(post)
        }
        Err(CreatePostError::AuthorNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(CreatePostError::RepositoryError(e)) => {
            error!(author_id = %user.user_id, error = %e, "Failed to create post");
            ApiResponse::internal_error()
        }
    }
}

/// Newest posts across all users
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(PageQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Newest first, with authors", body = inline(SuccessResponse<Vec<PostWithAuthor>>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts")]
pub async fn list_posts_handler(
    _user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page =
        PageRequest::from_query(query.into_inner(), DEFAULT_POST_PAGE_SIZE, MAX_POST_PAGE_SIZE);

    match data.post.list_posts.execute(page).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(e) => {
            error!(limit = page.limit, offset = page.offset, error = %e, "Failed to list posts");
            ApiResponse::internal_error()
        }
    }
}

/// Posts by one author
#[utoipa::path(
    get,
    path = "/api/posts/user/{userId}",
    tag = "posts",
    params(("userId" = Uuid, Path, description = "Author id"), LimitQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Newest first", body = inline(SuccessResponse<Vec<PostWithAuthor>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts/user/{user_id}")]
pub async fn list_user_posts_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let author_id = path.into_inner();
    let limit = clamp_limit(query.limit, DEFAULT_POST_PAGE_SIZE, MAX_POST_PAGE_SIZE);

    match data.post.list_user_posts.execute(author_id, limit).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(e) => {
            error!(author_id = %author_id, error = %e, "Failed to list user posts");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "The post with its author", body = inline(SuccessResponse<PostWithAuthor>)),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts/{id}")]
pub async fn get_post_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get_post.execute(post_id).await {
        Ok(post) => ApiResponse::success(post),
        Err(PostFeedError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(PostFeedError::QueryError(e)) => {
            error!(post_id = %post_id, error = %e, "Failed to fetch post");
            ApiResponse::internal_error()
        }
    }
}

/// Delete a post
///
/// Only the author may delete. Comments and likes on the post are removed with it.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/posts/{id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.delete_post.execute(post_id, user.id()).await {
        Ok(()) => {
            info!(post_id = %post_id, user_id = %user.user_id, "Post deleted");
            ApiResponse::message("Post deleted")
        }
        Err(DeletePostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(DeletePostError::NotAuthor) => {
            warn!(post_id = %post_id, user_id = %user.user_id, "Post delete refused");
            ApiResponse::forbidden("FORBIDDEN", "Only the author can delete this post")
        }
        Err(DeletePostError::RepositoryError(e)) => {
            error!(post_id = %post_id, error = %e, "Failed to delete post");
            ApiResponse::internal_error()
        }
    }
}
