use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::post::application::domain::entities::CommentWithAuthor;
use crate::post::application::ports::{
    incoming::use_cases::{
        CommentError, CreateCommentCommand, CreateCommentUseCase, DeleteCommentUseCase,
        ListCommentsUseCase,
    },
    outgoing::{CommentRepository, CommentRepositoryError, NewComment, PostQuery},
};

#[derive(Debug, Clone)]
pub struct CommentService<Q, R, U>
where
    Q: PostQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    query: Q,
    repository: R,
    users: U,
}

impl<Q, R, U> CommentService<Q, R, U>
where
    Q: PostQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
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

fn repository_error(e: impl ToString) -> CommentError {
    CommentError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q, R, U> CreateCommentUseCase for CommentService<Q, R, U>
where
    Q: PostQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        command: CreateCommentCommand,
    ) -> Result<CommentWithAuthor, CommentError> {
        let comment = self
            .repository
            .create_comment(NewComment {
                post_id: command.post_id(),
                author_id: author.value(),
                content: command.content().to_string(),
            })
            .await
            .map_err(|e| match e {
                CommentRepositoryError::PostNotFound => CommentError::PostNotFound,
                other => repository_error(other),
            })?;

        let author = self
            .users
            .find_by_id(comment.author_id)
            .await
            .map_err(repository_error)?
            .ok_or_else(|| repository_error("Comment author vanished"))?
            .to_summary();

        info!(comment_id = %comment.id, post_id = %comment.post_id, "Comment created");

        Ok(CommentWithAuthor { comment, author })
    }
}

#[async_trait]
impl<Q, R, U> ListCommentsUseCase for CommentService<Q, R, U>
where
    Q: PostQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, CommentError> {
        let comments = self
            .query
            .list_comments(post_id)
            .await
            .map_err(repository_error)?;

        let author_ids: Vec<Uuid> = comments.iter().map(|c| c.author_id).collect();
        let authors = self
            .users
            .summaries_by_id(&author_ids)
            .await
            .map_err(repository_error)?;

        Ok(comments
            .into_iter()
            .filter_map(|comment| {
                let author = authors.get(&comment.author_id)?.clone();
                Some(CommentWithAuthor { comment, author })
            })
            .collect())
    }
}

#[async_trait]
impl<Q, R, U> DeleteCommentUseCase for CommentService<Q, R, U>
where
    Q: PostQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, comment_id: Uuid, acting_user: UserId) -> Result<(), CommentError> {
        let comment = self
            .query
            .find_comment(comment_id)
            .await
            .map_err(repository_error)?
            .ok_or(CommentError::CommentNotFound)?;

        if comment.author_id != acting_user.value() {
            warn!(comment_id = %comment_id, user_id = %acting_user, "Non-author tried to delete comment");
            return Err(CommentError::NotAuthor);
        }

        if !self
            .repository
            .delete_comment(comment_id)
            .await
            .map_err(repository_error)?
        {
            return Err(CommentError::CommentNotFound);
        }

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::memory::{InMemoryContent, InMemoryUsers};

    fn command(post_id: Uuid, text: &str) -> CreateCommentCommand {
        CreateCommentCommand::new(post_id, text.to_string()).unwrap()
    }

    #[tokio::test]
    async fn comment_increments_post_counter() {
        // Arrange
        let users = InMemoryUsers::default();
        let content = InMemoryContent::default();
        let ana = users.add("ana").await;
        let post = content.seed_post(ana, "hello").await;
        let service = CommentService::new(content.clone(), content.clone(), users);

        // Act
        let created =
            CreateCommentUseCase::execute(&service, UserId::from(ana), command(post.id, "nice"))
                .await
                .unwrap();

        // Assert
        assert_eq!(created.author.username, "ana");
        let post = content.find_post(post.id).await.unwrap().unwrap();
        assert_eq!(post.comments_count, 1);
    }

    #[tokio::test]
    async fn comment_on_unknown_post_is_not_found() {
        let users = InMemoryUsers::default();
        let content = InMemoryContent::default();
        let ana = users.add("ana").await;
        let service = CommentService::new(content.clone(), content, users);

        let result = CreateCommentUseCase::execute(
            &service,
            UserId::from(ana),
            command(Uuid::new_v4(), "hello?"),
        )
        .await;

        assert!(matches!(result, Err(CommentError::PostNotFound)));
    }

    #[tokio::test]
    async fn delete_comment_decrements_counter_and_checks_author() {
        let users = InMemoryUsers::default();
        let content = InMemoryContent::default();
        let ana = users.add("ana").await;
        let ben = users.add("ben").await;
        let post = content.seed_post(ana, "hello").await;
        let service = CommentService::new(content.clone(), content.clone(), users);
        let created =
            CreateCommentUseCase::execute(&service, UserId::from(ben), command(post.id, "hey"))
                .await
                .unwrap();

        let by_other =
            DeleteCommentUseCase::execute(&service, created.comment.id, UserId::from(ana)).await;
        assert!(matches!(by_other, Err(CommentError::NotAuthor)));

        DeleteCommentUseCase::execute(&service, created.comment.id, UserId::from(ben))
            .await
            .unwrap();

        let post = content.find_post(post.id).await.unwrap().unwrap();
        assert_eq!(post.comments_count, 0);
    }

    #[tokio::test]
    async fn comments_listed_newest_first() {
        let users = InMemoryUsers::default();
        let content = InMemoryContent::default();
        let ana = users.add("ana").await;
        let post = content.seed_post(ana, "hello").await;
        let service = CommentService::new(content.clone(), content, users);
        for text in ["one", "two"] {
            CreateCommentUseCase::execute(&service, UserId::from(ana), command(post.id, text))
                .await
                .unwrap();
        }

        let comments = ListCommentsUseCase::execute(&service, post.id).await.unwrap();

        let texts: Vec<_> = comments.iter().map(|c| c.comment.content.as_str()).collect();
        assert_eq!(texts, vec!["two", "one"]);
    }
}
