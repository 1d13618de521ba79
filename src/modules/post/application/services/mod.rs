mod comment_service;
mod like_service;
mod post_feed_service;
mod post_publishing_service;

pub use comment_service::CommentService;
pub use like_service::LikeService;
pub use post_feed_service::PostFeedService;
pub use post_publishing_service::PostPublishingService;
