use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::post::application::domain::entities::CommentWithAuthor;
use crate::post::application::ports::incoming::use_cases::{CommentError, CreateCommentCommand};
use crate::shared::api::{ApiResponse, MessageBody};
use crate::AppState;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub post_id: Uuid,
    pub content: String,
}

fn comment_error_response(e: CommentError, context: Uuid) -> HttpResponse {
    match e {
        CommentError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        CommentError::CommentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        CommentError::NotAuthor => {
            ApiResponse::forbidden("FORBIDDEN", "Only the author can delete this comment")
        }
        CommentError::RepositoryError(msg) => {
            error!(id = %context, error = %msg, "Comment operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Comment on a post
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "comments",
    request_body = CreateCommentDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Comment created with its author", body = inline(SuccessResponse<CommentWithAuthor>)),
        (status = 400, description = "Empty or oversized content", body = ErrorResponse),
        (status = 404, description = "Post does not exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/comments")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    body: web::Json<CreateCommentDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();
    let post_id = dto.post_id;
    let command = match CreateCommentCommand::new(post_id, dto.content) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.post.create_comment.execute(user.id(), command).await {
        Ok(comment) => {
            info!(comment_id = %comment.comment.id, post_id = %post_id, "Comment created");
            ApiResponse::created(comment)
        }
        Err(e) => comment_error_response(e, post_id),
    }
}

/// Comments on a post, newest first
#[utoipa::path(
    get,
    path = "/api/comments/post/{postId}",
    tag = "comments",
    params(("postId" = Uuid, Path, description = "Post id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Newest first, with authors", body = inline(SuccessResponse<Vec<CommentWithAuthor>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/comments/post/{post_id}")]
pub async fn list_comments_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.list_comments.execute(post_id).await {
        Ok(comments) => ApiResponse::success(comments),
        Err(e) => comment_error_response(e, post_id),
    }
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = "comments",
    params(("id" = Uuid, Path, description = "Comment id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "No such comment", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/comments/{id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    match data.post.delete_comment.execute(comment_id, user.id()).await {
        Ok(()) => ApiResponse::message("Comment deleted"),
        Err(CommentError::NotAuthor) => {
            warn!(comment_id = %comment_id, user_id = %user.user_id, "Comment delete refused");
            comment_error_response(CommentError::NotAuthor, comment_id)
        }
        Err(e) => comment_error_response(e, comment_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::post::application::ports::incoming::use_cases::{
        CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{token_provider_for, TEST_BEARER};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockCreateComment {
        result: Result<CommentWithAuthor, CommentError>,
    }

    #[async_trait]
    impl CreateCommentUseCase for MockCreateComment {
        async fn execute(
            &self,
            _author: UserId,
            _command: CreateCommentCommand,
        ) -> Result<CommentWithAuthor, CommentError> {
            self.result.clone()
        }
    }

    #[derive(Clone)]
    struct MockListComments;

    #[async_trait]
    impl ListCommentsUseCase for MockListComments {
        async fn execute(&self, _post_id: Uuid) -> Result<Vec<CommentWithAuthor>, CommentError> {
            Ok(vec![])
        }
    }

    #[derive(Clone)]
    struct MockDeleteComment {
        result: Result<(), CommentError>,
    }

    #[async_trait]
    impl DeleteCommentUseCase for MockDeleteComment {
        async fn execute(&self, _comment_id: Uuid, _user: UserId) -> Result<(), CommentError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_comment_on_missing_post_is_not_found() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_create_comment(MockCreateComment {
                result: Err(CommentError::PostNotFound),
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(create_comment_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::post()
            .uri("/api/comments")
            .insert_header(("Authorization", TEST_BEARER))
            .set_json(serde_json::json!({ "postId": Uuid::new_v4(), "content": "nice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_empty_comment_is_validation_error() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(create_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/comments")
            .insert_header(("Authorization", TEST_BEARER))
            .set_json(serde_json::json!({ "postId": Uuid::new_v4(), "content": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_list_comments_for_post_without_comments() {
        let state = TestAppStateBuilder::default()
            .with_list_comments(MockListComments)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(list_comments_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/comments/post/{}", Uuid::new_v4()))
            .insert_header(("Authorization", TEST_BEARER))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_delete_comment_maps_errors() {
        let cases = vec![
            (CommentError::CommentNotFound, 404),
            (CommentError::NotAuthor, 403),
            (CommentError::RepositoryError("boom".to_string()), 500),
        ];

        for (error, expected) in cases {
            let state = TestAppStateBuilder::default()
                .with_delete_comment(MockDeleteComment { result: Err(error) })
                .build();
            let app = test::init_service(
                App::new()
                    .app_data(state)
                    .app_data(token_provider_for(Uuid::new_v4()))
                    .service(delete_comment_handler),
            )
            .await;

            let req = test::TestRequest::delete()
                .uri(&format!("/api/comments/{}", Uuid::new_v4()))
                .insert_header(("Authorization", TEST_BEARER))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), expected);
        }
    }
}
