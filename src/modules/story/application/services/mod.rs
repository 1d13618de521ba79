mod story_feed_service;
mod story_publishing_service;
mod story_reaper_service;

pub use story_feed_service::StoryFeedService;
pub use story_publishing_service::StoryPublishingService;
pub use story_reaper_service::StoryReaperService;
