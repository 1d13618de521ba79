use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::shared::clock::Clock;
use crate::story::application::domain::entities::{Story, StoryWithAuthor};
use crate::story::application::ports::{
    incoming::use_cases::{ListActiveStoriesUseCase, ListUserStoriesUseCase, StoryFeedError},
    outgoing::StoryQuery,
};

#[derive(Debug, Clone)]
pub struct StoryFeedService<Q, U, C>
where
    Q: StoryQuery + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    query: Q,
    users: U,
    clock: C,
}

impl<Q, U, C> StoryFeedService<Q, U, C>
where
    Q: StoryQuery + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    pub fn new(query: Q, users: U, clock: C) -> Self {
        Self {
            query,
            users,
            clock,
        }
    }

    async fn with_authors(
        &self,
        stories: Vec<Story>,
    ) -> Result<Vec<StoryWithAuthor>, StoryFeedError> {
        let author_ids: Vec<Uuid> = stories.iter().map(|s| s.author_id).collect();
        let authors = self
            .users
            .summaries_by_id(&author_ids)
            .await
            .map_err(|e| StoryFeedError::QueryError(e.to_string()))?;

        Ok(stories
            .into_iter()
            .filter_map(|story| {
                let author = authors.get(&story.author_id)?.clone();
                Some(StoryWithAuthor { story, author })
            })
            .collect())
    }
}

#[async_trait]
impl<Q, U, C> ListActiveStoriesUseCase for StoryFeedService<Q, U, C>
where
    Q: StoryQuery + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    async fn execute(&self, limit: u64) -> Result<Vec<StoryWithAuthor>, StoryFeedError> {
        let stories = self
            .query
            .list_active(self.clock.now(), limit)
            .await
            .map_err(|e| StoryFeedError::QueryError(e.to_string()))?;

        self.with_authors(stories).await
    }
}

#[async_trait]
impl<Q, U, C> ListUserStoriesUseCase for StoryFeedService<Q, U, C>
where
    Q: StoryQuery + Send + Sync,
    U: UserQuery + Send + Sync,
    C: Clock,
{
    async fn execute(&self, author_id: Uuid) -> Result<Vec<StoryWithAuthor>, StoryFeedError> {
        let stories = self
            .query
            .list_active_by_author(author_id, self.clock.now())
            .await
            .map_err(|e| StoryFeedError::QueryError(e.to_string()))?;

        self.with_authors(stories).await
    }
}
