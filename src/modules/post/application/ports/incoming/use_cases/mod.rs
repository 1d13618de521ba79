mod comments;
mod create_post;
mod delete_post;
mod likes;
mod post_feed;

pub use comments::{
    CommentError, CreateCommentCommand, CreateCommentCommandError, CreateCommentUseCase,
    DeleteCommentUseCase, ListCommentsUseCase, MAX_COMMENT_LENGTH,
};
pub use create_post::{
    CreatePostCommand, CreatePostCommandError, CreatePostError, CreatePostUseCase,
    MAX_POST_LENGTH,
};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use likes::{LikeError, LikeUseCase, UnlikeUseCase};
pub use post_feed::{
    GetPostUseCase, ListPostsUseCase, ListUserPostsUseCase, PostFeedError,
    DEFAULT_POST_PAGE_SIZE, MAX_POST_PAGE_SIZE,
};
