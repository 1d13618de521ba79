mod story_reaper;

pub use story_reaper::StoryReaper;
