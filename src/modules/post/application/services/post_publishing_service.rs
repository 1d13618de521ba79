use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::post::application::domain::entities::PostWithAuthor;
use crate::post::application::ports::{
    incoming::use_cases::{
        CreatePostCommand, CreatePostError, CreatePostUseCase, DeletePostError, DeletePostUseCase,
    },
    outgoing::{NewPost, PostQuery, PostRepository, PostRepositoryError},
};

/// Creating and deleting posts. Deletion is restricted to the author.
#[derive(Debug, Clone)]
pub struct PostPublishingService<Q, R, U>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    query: Q,
    repository: R,
    users: U,
}

impl<Q, R, U> PostPublishingService<Q, R, U>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(query: Q, repository: R, users: U) -> Self {
        Self {
            query,
            repository,
            users,
        }
    }
}

#[async_trait]
impl<Q, R, U> CreatePostUseCase for PostPublishingService<Q, R, U>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        command: CreatePostCommand,
    ) -> Result<PostWithAuthor, CreatePostError> {
        let post = self
            .repository
            .create_post(NewPost {
                author_id: author.value(),
                content: command.content().to_string(),
                image_url: command.image_url().cloned(),
                video_url: command.video_url().cloned(),
            })
            .await
            .map_err(|e| match e {
                PostRepositoryError::UnknownAuthor => CreatePostError::AuthorNotFound,
                other => CreatePostError::RepositoryError(other.to_string()),
            })?;

        let author = self
            .users
            .find_by_id(post.author_id)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?
            .ok_or(CreatePostError::AuthorNotFound)?
            .to_summary();

        info!(post_id = %post.id, author_id = %post.author_id, "Post created");

        Ok(PostWithAuthor { post, author })
    }
}

#[async_trait]
impl<Q, R, U> DeletePostUseCase for PostPublishingService<Q, R, U>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid, acting_user: UserId) -> Result<(), DeletePostError> {
        let post = self
            .query
            .find_post(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::PostNotFound)?;

        if post.author_id != acting_user.value() {
            warn!(post_id = %post_id, user_id = %acting_user, "Non-author tried to delete post");
            return Err(DeletePostError::NotAuthor);
        }

        let deleted = self
            .repository
            .delete_post(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(DeletePostError::PostNotFound);
        }

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::application::domain::entities::Post;
    use crate::tests::support::memory::{InMemoryContent, InMemoryUsers};
    use mockall::{mock, predicate::eq};

    mock! {
        pub PostRepositoryMock {}
        #[async_trait]
        impl PostRepository for PostRepositoryMock {
            async fn create_post(&self, post: NewPost) -> Result<Post, PostRepositoryError>;
            async fn delete_post(&self, post_id: Uuid) -> Result<bool, PostRepositoryError>;
        }
    }

    fn command(content: &str) -> CreatePostCommand {
        CreatePostCommand::new(content.to_string(), None, None).unwrap()
    }

    #[tokio::test]
    async fn create_post_returns_post_with_author() {
        // Arrange
        let users = InMemoryUsers::default();
        let content = InMemoryContent::default();
        let ana = users.add("ana").await;
        let service = PostPublishingService::new(content.clone(), content.clone(), users);

        // Act
        let created = CreatePostUseCase::execute(&service, UserId::from(ana), command("hello"))
            .await
            .unwrap();

        // Assert
        assert_eq!(created.post.content, "hello");
        assert_eq!(created.post.likes_count, 0);
        assert_eq!(created.post.comments_count, 0);
        assert_eq!(created.author.id, ana);
        assert!(content.find_post(created.post.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn create_post_for_missing_author_is_reported() {
        let mut repository = MockPostRepositoryMock::new();
        repository
            .expect_create_post()
            .times(1)
            .returning(|_| Err(PostRepositoryError::UnknownAuthor));
        let service = PostPublishingService::new(
            InMemoryContent::default(),
            repository,
            InMemoryUsers::default(),
        );

        let result =
            CreatePostUseCase::execute(&service, UserId::from(Uuid::new_v4()), command("hi")).await;

        assert!(matches!(result, Err(CreatePostError::AuthorNotFound)));
    }

    #[tokio::test]
    async fn delete_by_non_author_never_reaches_repository() {
        // Arrange
        let users = InMemoryUsers::default();
        let content = InMemoryContent::default();
        let ana = users.add("ana").await;
        let post = content.seed_post(ana, "mine").await;

        let mut repository = MockPostRepositoryMock::new();
        repository.expect_delete_post().never();
        let service = PostPublishingService::new(content, repository, users);

        // Act
        let result =
            DeletePostUseCase::execute(&service, post.id, UserId::from(Uuid::new_v4())).await;

        // Assert
        assert!(matches!(result, Err(DeletePostError::NotAuthor)));
    }

    #[tokio::test]
    async fn author_deletes_own_post() {
        let users = InMemoryUsers::default();
        let content = InMemoryContent::default();
        let ana = users.add("ana").await;
        let post = content.seed_post(ana, "mine").await;

        let mut repository = MockPostRepositoryMock::new();
        repository
            .expect_delete_post()
            .with(eq(post.id))
            .times(1)
            .returning(|_| Ok(true));
        let service = PostPublishingService::new(content, repository, users);

        let result = DeletePostUseCase::execute(&service, post.id, UserId::from(ana)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_unknown_post_is_not_found() {
        let service = PostPublishingService::new(
            InMemoryContent::default(),
            InMemoryContent::default(),
            InMemoryUsers::default(),
        );

        let result =
            DeletePostUseCase::execute(&service, Uuid::new_v4(), UserId::from(Uuid::new_v4()))
                .await;

        assert!(matches!(result, Err(DeletePostError::PostNotFound)));
    }
}
