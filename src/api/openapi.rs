use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::analytics::adapter::incoming::web::routes::RecordSnapshotDto;
use crate::analytics::application::domain::entities::AnalyticsSnapshot;
use crate::auth::adapter::incoming::web::routes::{
    AuthSessionResponse, LoginRequestDto, RegisterUserRequest, UpdateProfileRequest,
};
use crate::auth::application::domain::entities::{PublicUser, UserProfile, UserSummary};
use crate::friendship::adapter::incoming::web::routes::{
    FriendRequestResolution, FriendshipStatusResponse, SendFriendRequestDto,
};
use crate::friendship::application::domain::entities::{
    FriendRequest, FriendRequestStatus, IncomingFriendRequest, OutgoingFriendRequest,
};
use crate::post::adapter::incoming::web::routes::{
    CreateCommentDto, CreatePostDto, LikeRequestDto,
};
use crate::post::application::domain::entities::{
    Comment, CommentWithAuthor, Like, LikeTarget, Post, PostWithAuthor,
};
use crate::shared::api::MessageBody;
use crate::story::adapter::incoming::web::routes::CreateStoryDto;
use crate::story::application::domain::entities::{Story, StoryWithAuthor};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BloodSource API",
        version = "1.0.0",
        description = "Social network backend for blood donors: accounts, friendships, posts, stories and staff analytics",
        contact(
            name = "API Support",
            email = "support@bloodsource.app"
        )
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::get_current_user_handler,

        // Users
        crate::auth::adapter::incoming::web::routes::list_users_handler,
        crate::auth::adapter::incoming::web::routes::get_user_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,

        // Friend requests
        crate::friendship::adapter::incoming::web::routes::send_friend_request_handler,
        crate::friendship::adapter::incoming::web::routes::list_incoming_requests_handler,
        crate::friendship::adapter::incoming::web::routes::list_outgoing_requests_handler,
        crate::friendship::adapter::incoming::web::routes::accept_friend_request_handler,
        crate::friendship::adapter::incoming::web::routes::reject_friend_request_handler,

        // Friends
        crate::friendship::adapter::incoming::web::routes::list_friends_handler,
        crate::friendship::adapter::incoming::web::routes::friendship_status_handler,

        // Posts
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::list_posts_handler,
        crate::post::adapter::incoming::web::routes::list_user_posts_handler,
        crate::post::adapter::incoming::web::routes::get_post_handler,
        crate::post::adapter::incoming::web::routes::delete_post_handler,

        // Comments
        crate::post::adapter::incoming::web::routes::create_comment_handler,
        crate::post::adapter::incoming::web::routes::list_comments_handler,
        crate::post::adapter::incoming::web::routes::delete_comment_handler,

        // Likes
        crate::post::adapter::incoming::web::routes::like_handler,
        crate::post::adapter::incoming::web::routes::unlike_handler,

        // Stories
        crate::story::adapter::incoming::web::routes::create_story_handler,
        crate::story::adapter::incoming::web::routes::list_stories_handler,
        crate::story::adapter::incoming::web::routes::list_user_stories_handler,

        // Analytics
        crate::analytics::adapter::incoming::web::routes::list_analytics_handler,
        crate::analytics::adapter::incoming::web::routes::latest_analytics_handler,
        crate::analytics::adapter::incoming::web::routes::record_analytics_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            MessageBody,

            RegisterUserRequest,
            LoginRequestDto,
            UpdateProfileRequest,
            AuthSessionResponse,
            UserProfile,
            UserSummary,
            PublicUser,

            SendFriendRequestDto,
            FriendRequestResolution,
            FriendshipStatusResponse,
            FriendRequest,
            FriendRequestStatus,
            IncomingFriendRequest,
            OutgoingFriendRequest,

            CreatePostDto,
            CreateCommentDto,
            LikeRequestDto,
            Post,
            PostWithAuthor,
            Comment,
            CommentWithAuthor,
            Like,
            LikeTarget,

            CreateStoryDto,
            Story,
            StoryWithAuthor,

            RecordSnapshotDto,
            AnalyticsSnapshot
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and the current account"),
        (name = "users", description = "User directory and profile edits"),
        (name = "friends", description = "Friend requests, friend lists and friendship checks"),
        (name = "posts", description = "Feed posts"),
        (name = "comments", description = "Comments on posts"),
        (name = "likes", description = "Likes on posts and comments"),
        (name = "stories", description = "Stories that expire after a day"),
        (name = "analytics", description = "Staff-only platform analytics"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            );
        }
    }
}
