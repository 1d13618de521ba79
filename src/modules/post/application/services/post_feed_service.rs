use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::post::application::domain::entities::{Post, PostWithAuthor};
use crate::post::application::ports::{
    incoming::use_cases::{GetPostUseCase, ListPostsUseCase, ListUserPostsUseCase, PostFeedError},
    outgoing::PostQuery,
};
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone)]
pub struct PostFeedService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    query: Q,
    users: U,
}

impl<Q, U> PostFeedService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }

    /// One batched author lookup; keeps the order of `posts`.
    async fn with_authors(&self, posts: Vec<Post>) -> Result<Vec<PostWithAuthor>, PostFeedError> {
        let author_ids: Vec<Uuid> = posts.iter().map(|p| p.author_id).collect();
        let authors = self
            .users
            .summaries_by_id(&author_ids)
            .await
            .map_err(|e| PostFeedError::QueryError(e.to_string()))?;

        Ok(posts
            .into_iter()
            .filter_map(|post| {
                let author = authors.get(&post.author_id)?.clone();
                Some(PostWithAuthor { post, author })
            })
            .collect())
    }
}

#[async_trait]
impl<Q, U> ListPostsUseCase for PostFeedService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<Vec<PostWithAuthor>, PostFeedError> {
        let posts = self
            .query
            .list_posts(page.limit, page.offset)
            .await
            .map_err(|e| PostFeedError::QueryError(e.to_string()))?;

        self.with_authors(posts).await
    }
}

#[async_trait]
impl<Q, U> ListUserPostsUseCase for PostFeedService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        author_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PostWithAuthor>, PostFeedError> {
        let posts = self
            .query
            .list_posts_by_author(author_id, limit)
            .await
            .map_err(|e| PostFeedError::QueryError(e.to_string()))?;

        self.with_authors(posts).await
    }
}

#[async_trait]
impl<Q, U> GetPostUseCase for PostFeedService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<PostWithAuthor, PostFeedError> {
        let post = self
            .query
            .find_post(post_id)
            .await
            .map_err(|e| PostFeedError::QueryError(e.to_string()))?
            .ok_or(PostFeedError::PostNotFound)?;

        self.with_authors(vec![post])
            .await?
            .pop()
            .ok_or(PostFeedError::PostNotFound)
    }
}
