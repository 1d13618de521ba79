pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::analytics;
pub use modules::auth;
pub use modules::friendship;
pub use modules::post;
pub use modules::story;

use crate::analytics::adapter::outgoing::analytics_query_postgres::AnalyticsQueryPostgres;
use crate::analytics::adapter::outgoing::analytics_repository_postgres::AnalyticsRepositoryPostgres;
use crate::analytics::application::analytics_use_cases::AnalyticsUseCases;
use crate::analytics::application::services::AnalyticsService;
use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    GetCurrentUserService, LoginUserService, RegisterUserService, StaffAccountBootstrap,
    StaffBootstrapOutcome, UpdateProfileService, UserDirectoryService,
};
use crate::config::AppConfig;
use crate::friendship::adapter::outgoing::friendship_query_postgres::FriendshipQueryPostgres;
use crate::friendship::adapter::outgoing::friendship_repository_postgres::FriendshipRepositoryPostgres;
use crate::friendship::application::friendship_use_cases::FriendshipUseCases;
use crate::friendship::application::services::{
    FriendListService, FriendRequestListingService, RespondFriendRequestService,
    SendFriendRequestService,
};
use crate::post::adapter::outgoing::comment_repository_postgres::CommentRepositoryPostgres;
use crate::post::adapter::outgoing::like_repository_postgres::LikeRepositoryPostgres;
use crate::post::adapter::outgoing::post_query_postgres::PostQueryPostgres;
use crate::post::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::services::{
    CommentService, LikeService, PostFeedService, PostPublishingService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::clock::SystemClock;
use crate::story::adapter::incoming::scheduler::StoryReaper;
use crate::story::adapter::outgoing::story_query_postgres::StoryQueryPostgres;
use crate::story::adapter::outgoing::story_repository_postgres::StoryRepositoryPostgres;
use crate::story::application::services::{
    StoryFeedService, StoryPublishingService, StoryReaperService,
};
use crate::story::application::story_use_cases::StoryUseCases;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub friendship: FriendshipUseCases,
    pub post: PostUseCases,
    pub story: StoryUseCases,
    pub analytics: AnalyticsUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
) -> AppState {
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));

    let friendship_query = FriendshipQueryPostgres::new(Arc::clone(db));
    let friendship_repo = FriendshipRepositoryPostgres::new(Arc::clone(db));

    let post_query = PostQueryPostgres::new(Arc::clone(db));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(db));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(db));
    let like_repo = LikeRepositoryPostgres::new(Arc::clone(db));

    let story_query = StoryQueryPostgres::new(Arc::clone(db));
    let story_repo = StoryRepositoryPostgres::new(Arc::clone(db));

    let analytics_query = AnalyticsQueryPostgres::new(Arc::clone(db));
    let analytics_repo = AnalyticsRepositoryPostgres::new(Arc::clone(db));

    let user_directory = Arc::new(UserDirectoryService::new(user_query.clone()));
    let friend_requests = Arc::new(FriendRequestListingService::new(
        friendship_query.clone(),
        user_query.clone(),
    ));
    let friend_list = Arc::new(FriendListService::new(
        friendship_query.clone(),
        user_query.clone(),
    ));
    let post_feed = Arc::new(PostFeedService::new(post_query.clone(), user_query.clone()));
    let post_publishing = Arc::new(PostPublishingService::new(
        post_query.clone(),
        post_repo,
        user_query.clone(),
    ));
    let comments = Arc::new(CommentService::new(post_query, comment_repo, user_query.clone()));
    let likes = Arc::new(LikeService::new(like_repo));
    let story_feed = Arc::new(StoryFeedService::new(
        story_query,
        user_query.clone(),
        SystemClock,
    ));
    let analytics = Arc::new(AnalyticsService::new(
        analytics_query,
        analytics_repo,
        user_query.clone(),
        SystemClock,
    ));

    AppState {
        auth: AuthUseCases {
            register: Arc::new(RegisterUserService::new(
                user_repo.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&token_provider),
            )),
            login: Arc::new(LoginUserService::new(
                user_query.clone(),
                password_hasher,
                token_provider,
            )),
            current_user: Arc::new(GetCurrentUserService::new(user_query.clone())),
            list_users: user_directory.clone(),
            get_user: user_directory,
            update_profile: Arc::new(UpdateProfileService::new(user_repo)),
        },
        friendship: FriendshipUseCases {
            send_request: Arc::new(SendFriendRequestService::new(
                friendship_query.clone(),
                friendship_repo.clone(),
                user_query.clone(),
            )),
            incoming_requests: friend_requests.clone(),
            outgoing_requests: friend_requests,
            respond: Arc::new(RespondFriendRequestService::new(
                friendship_query,
                friendship_repo,
            )),
            list_friends: friend_list.clone(),
            check_friendship: friend_list,
        },
        post: PostUseCases {
            create_post: post_publishing.clone(),
            list_posts: post_feed.clone(),
            list_user_posts: post_feed.clone(),
            get_post: post_feed,
            delete_post: post_publishing,
            create_comment: comments.clone(),
            list_comments: comments.clone(),
            delete_comment: comments,
            like: likes.clone(),
            unlike: likes,
        },
        story: StoryUseCases {
            create_story: Arc::new(StoryPublishingService::new(
                story_repo,
                user_query,
                SystemClock,
            )),
            list_active: story_feed.clone(),
            list_by_user: story_feed,
        },
        analytics: AnalyticsUseCases {
            list: analytics.clone(),
            latest: analytics.clone(),
            record: analytics,
        },
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting BloodSource backend...");

    let config = AppConfig::load().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    if config.run_migrations {
        Migrator::up(db_arc.as_ref(), None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let argon2 = config.argon2;
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(
        Argon2Hasher::with_params(argon2.memory_kib, argon2.iterations, argon2.parallelism)
            .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {e}"))?,
    );
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    if let Some(spec) = &config.bootstrap_staff {
        let bootstrap = StaffAccountBootstrap::new(
            UserQueryPostgres::new(Arc::clone(&db_arc)),
            UserRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&password_hasher),
        );
        match bootstrap.ensure(spec).await {
            Ok(StaffBootstrapOutcome::Created(id)) => info!(user_id = %id, "Staff account provisioned"),
            Ok(StaffBootstrapOutcome::AlreadyPresent(id)) => {
                info!(user_id = %id, "Staff account already present")
            }
            Err(e) => warn!(error = %e, "Staff account bootstrap failed"),
        }
    }

    let state = build_state(&db_arc, password_hasher, Arc::clone(&token_provider));

    let reaper = StoryReaper::start(
        Arc::new(StoryReaperService::new(
            StoryRepositoryPostgres::new(Arc::clone(&db_arc)),
            SystemClock,
        )),
        config.story_reaper_interval,
    );

    info!(address = %server_url, "HTTP server listening");

    let db_for_server = Arc::clone(&db_arc);
    let served = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await;

    reaper.stop().await;
    served.context("HTTP server terminated with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_handler);
    // Friendship
    cfg.service(crate::friendship::adapter::incoming::web::routes::send_friend_request_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::list_outgoing_requests_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::list_incoming_requests_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::accept_friend_request_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::reject_friend_request_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::list_friends_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::friendship_status_handler);
    // Posts
    cfg.service(crate::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::list_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::list_user_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::delete_post_handler);
    // Comments
    cfg.service(crate::post::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::list_comments_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::delete_comment_handler);
    // Likes
    cfg.service(crate::post::adapter::incoming::web::routes::like_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::unlike_handler);
    // Stories
    cfg.service(crate::story::adapter::incoming::web::routes::create_story_handler);
    cfg.service(crate::story::adapter::incoming::web::routes::list_stories_handler);
    cfg.service(crate::story::adapter::incoming::web::routes::list_user_stories_handler);
    // Analytics
    cfg.service(crate::analytics::adapter::incoming::web::routes::list_analytics_handler);
    cfg.service(crate::analytics::adapter::incoming::web::routes::latest_analytics_handler);
    cfg.service(crate::analytics::adapter::incoming::web::routes::record_analytics_handler);
}
