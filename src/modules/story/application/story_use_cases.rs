use std::sync::Arc;

use crate::story::application::ports::incoming::use_cases::{
    CreateStoryUseCase, ListActiveStoriesUseCase, ListUserStoriesUseCase,
};

#[derive(Clone)]
pub struct StoryUseCases {
    pub create_story: Arc<dyn CreateStoryUseCase + Send + Sync>,
    pub list_active: Arc<dyn ListActiveStoriesUseCase + Send + Sync>,
    pub list_by_user: Arc<dyn ListUserStoriesUseCase + Send + Sync>,
}
