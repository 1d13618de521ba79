mod comments;
mod likes;
mod posts;

pub use comments::{
    create_comment_handler, delete_comment_handler, list_comments_handler, CreateCommentDto,
};
pub use likes::{like_handler, unlike_handler, LikeRequestDto};
pub use posts::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts_handler,
    list_user_posts_handler, CreatePostDto, LimitQuery,
};
pub use comments::{__path_create_comment_handler, __path_delete_comment_handler, __path_list_comments_handler};
pub use likes::{__path_like_handler, __path_unlike_handler};
pub use posts::{__path_create_post_handler, __path_delete_post_handler, __path_get_post_handler, __path_list_posts_handler, __path_list_user_posts_handler};
