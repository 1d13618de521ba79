use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::shared::clock::Clock;
use crate::story::application::domain::entities::{expiry_for, StoryWithAuthor};
use crate::story::application::ports::{
    incoming::use_cases::{CreateStoryCommand, CreateStoryError, CreateStoryUseCase},
    outgoing::{NewStory, StoryRepository, StoryRepositoryError},
};

#[derive(Debug, Clone)]
pub struct StoryPublishingService<R, U, C>
where
    R: StoryRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    repository: R,
    users: U,
    clock: C,
}

impl<R, U, C> StoryPublishingService<R, U, C>
where
    R: StoryRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    pub fn new(repository: R, users: U, clock: C) -> Self {
        Self {
            repository,
            users,
            clock,
        }
    }
}

#[async_trait]
impl<R, U, C> CreateStoryUseCase for StoryPublishingService<R, U, C>
where
    R: StoryRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    async fn execute(
        &self,
        author: UserId,
        command: CreateStoryCommand,
    ) -> Result<StoryWithAuthor, CreateStoryError> {
        let now = self.clock.now();

        let story = self
            .repository
            .create_story(NewStory {
                author_id: author.value(),
                image_url: command.image_url().cloned(),
                video_url: command.video_url().cloned(),
                text: command.text().cloned(),
                background_color: command.background_color().cloned(),
                created_at: now,
                expires_at: expiry_for(now),
            })
            .await
            .map_err(|e| match e {
                StoryRepositoryError::UnknownAuthor => CreateStoryError::AuthorNotFound,
                other => CreateStoryError::RepositoryError(other.to_string()),
            })?;

        let author = self
            .users
            .find_by_id(story.author_id)
            .await
            .map_err(|e| CreateStoryError::RepositoryError(e.to_string()))?
            .ok_or(CreateStoryError::AuthorNotFound)?
            .to_summary();

        info!(story_id = %story.id, author_id = %story.author_id, expires_at = %story.expires_at, "Story created");

        Ok(StoryWithAuthor { story, author })
    }
}
