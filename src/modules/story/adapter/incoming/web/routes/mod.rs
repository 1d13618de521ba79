mod stories;

pub use stories::{
    create_story_handler, list_stories_handler, list_user_stories_handler, CreateStoryDto,
    StoryListQuery,
};
pub use stories::{__path_create_story_handler, __path_list_stories_handler, __path_list_user_stories_handler};
