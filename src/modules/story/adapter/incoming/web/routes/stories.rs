use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::clamp_limit;
use crate::story::application::domain::entities::StoryWithAuthor;
use crate::story::application::ports::incoming::use_cases::{
    CreateStoryCommand, CreateStoryError, DEFAULT_STORY_LIMIT, MAX_STORY_LIMIT,
};
use crate::AppState;
use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Any client-supplied expiry is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoryDto {
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub text: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct StoryListQuery {
    /// Defaults to 10, capped at 50.
    pub limit: Option<u64>,
}

/// Post a story that disappears after 24 hours
#[utoipa::path(
    post,
    path = "/api/stories",
    tag = "stories",
    request_body = CreateStoryDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Story created", body = inline(SuccessResponse<StoryWithAuthor>)),
        (status = 400, description = "No image, video or text", body = ErrorResponse),
        (status = 404, description = "Author account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/stories")]
pub async fn create_story_handler(
    user: AuthenticatedUser,
    body: web::Json<CreateStoryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();
    let command = match CreateStoryCommand::new(
        dto.image_url,
        dto.video_url,
        dto.text,
        dto.background_color,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.story.create_story.execute(user.id(), command).await {
        Ok(story) => {
            info!(story_id = %story.story.id, author_id = %user.user_id, "Story created");
            ApiResponse::created(story)
        }
        Err(CreateStoryError::AuthorNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(CreateStoryError::RepositoryError(e)) => {
            error!(author_id = %user.user_id, error = %e, "Failed to create story");
            ApiResponse::internal_error()
        }
    }
}

/// Active stories from everyone
#[utoipa::path(
    get,
    path = "/api/stories",
    tag = "stories",
    params(StoryListQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Unexpired stories, newest first", body = inline(SuccessResponse<Vec<StoryWithAuthor>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/stories")]
pub async fn list_stories_handler(
    _user: AuthenticatedUser,
    query: web::Query<StoryListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let limit = clamp_limit(query.limit, DEFAULT_STORY_LIMIT, MAX_STORY_LIMIT);

    match data.story.list_active.execute(limit).await {
        Ok(stories) => ApiResponse::success(stories),
        Err(e) => {
            error!(limit, error = %e, "Failed to list stories");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/stories/user/{userId}",
    tag = "stories",
    params(("userId" = Uuid, Path, description = "Author id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Author's unexpired stories", body = inline(SuccessResponse<Vec<StoryWithAuthor>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/stories/user/{user_id}")]
pub async fn list_user_stories_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let author_id = path.into_inner();

    match data.story.list_by_user.execute(author_id).await {
        Ok(stories) => ApiResponse::success(stories),
        Err(e) => {
            error!(author_id = %author_id, error = %e, "Failed to list user stories");
            ApiResponse::internal_error()
        }
    }
}
