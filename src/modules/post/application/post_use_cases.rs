use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::{
    CreateCommentUseCase, CreatePostUseCase, DeleteCommentUseCase, DeletePostUseCase,
    GetPostUseCase, LikeUseCase, ListCommentsUseCase, ListPostsUseCase, ListUserPostsUseCase,
    UnlikeUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create_post: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub list_posts: Arc<dyn ListPostsUseCase + Send + Sync>,
    pub list_user_posts: Arc<dyn ListUserPostsUseCase + Send + Sync>,
    pub get_post: Arc<dyn GetPostUseCase + Send + Sync>,
    pub delete_post: Arc<dyn DeletePostUseCase + Send + Sync>,
    pub create_comment: Arc<dyn CreateCommentUseCase + Send + Sync>,
    pub list_comments: Arc<dyn ListCommentsUseCase + Send + Sync>,
    pub delete_comment: Arc<dyn DeleteCommentUseCase + Send + Sync>,
    pub like: Arc<dyn LikeUseCase + Send + Sync>,
    pub unlike: Arc<dyn UnlikeUseCase + Send + Sync>,
}
