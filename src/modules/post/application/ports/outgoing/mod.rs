pub mod comment_repository;
pub mod like_repository;
pub mod post_query;
pub mod post_repository;

pub use comment_repository::{CommentRepository, CommentRepositoryError, NewComment};
pub use like_repository::{LikeRepository, LikeRepositoryError};
pub use post_query::{PostQuery, PostQueryError};
pub use post_repository::{NewPost, PostRepository, PostRepositoryError};
