use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::{Like, LikeTarget};
use crate::post::application::ports::{
    incoming::use_cases::{LikeError, LikeUseCase, UnlikeUseCase},
    outgoing::{LikeRepository, LikeRepositoryError},
};

#[derive(Debug, Clone)]
pub struct LikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    repository: R,
}

impl<R> LikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(e: LikeRepositoryError) -> LikeError {
    match e {
        LikeRepositoryError::AlreadyLiked => LikeError::AlreadyLiked,
        LikeRepositoryError::TargetNotFound => LikeError::TargetNotFound,
        LikeRepositoryError::DatabaseError(msg) => LikeError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> LikeUseCase for LikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, target: LikeTarget) -> Result<Like, LikeError> {
        let like = self
            .repository
            .create_like(user.value(), target)
            .await
            .map_err(map_repository_error)?;

        info!(like_id = %like.id, user_id = %user, target = ?target, "Like created");
        Ok(like)
    }
}

#[async_trait]
impl<R> UnlikeUseCase for LikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, target: LikeTarget) -> Result<(), LikeError> {
        let removed = self
            .repository
            .delete_like(user.value(), target)
            .await
            .map_err(map_repository_error)?;

        if !removed {
            return Err(LikeError::LikeNotFound);
        }

        info!(user_id = %user, target = ?target, "Like removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::memory::InMemoryContent;
    use uuid::Uuid;

    #[tokio::test]
    async fn like_and_unlike_post_moves_counter() {
        // Arrange
        let content = InMemoryContent::default();
        let author = Uuid::new_v4();
        let fan = UserId::from(Uuid::new_v4());
        let post = content.seed_post(author, "hello").await;
        let service = LikeService::new(content.clone());
        let target = LikeTarget::Post(post.id);

        // Act
        LikeUseCase::execute(&service, fan, target).await.unwrap();
        let after_like = content.post_snapshot(post.id).unwrap().likes_count;
        UnlikeUseCase::execute(&service, fan, target).await.unwrap();
        let after_unlike = content.post_snapshot(post.id).unwrap().likes_count;

        // Assert
        assert_eq!(after_like, 1);
        assert_eq!(after_unlike, 0);
    }

    #[tokio::test]
    async fn liking_twice_is_conflict() {
        let content = InMemoryContent::default();
        let post = content.seed_post(Uuid::new_v4(), "hello").await;
        let service = LikeService::new(content.clone());
        let fan = UserId::from(Uuid::new_v4());

        LikeUseCase::execute(&service, fan, LikeTarget::Post(post.id))
            .await
            .unwrap();
        let again = LikeUseCase::execute(&service, fan, LikeTarget::Post(post.id)).await;

        assert!(matches!(again, Err(LikeError::AlreadyLiked)));
        assert_eq!(content.post_snapshot(post.id).unwrap().likes_count, 1);
    }

    #[tokio::test]
    async fn unlike_without_like_is_not_found() {
        let content = InMemoryContent::default();
        let post = content.seed_post(Uuid::new_v4(), "hello").await;
        let service = LikeService::new(content);

        let result = UnlikeUseCase::execute(
            &service,
            UserId::from(Uuid::new_v4()),
            LikeTarget::Post(post.id),
        )
        .await;

        assert!(matches!(result, Err(LikeError::LikeNotFound)));
    }

    #[tokio::test]
    async fn liking_unknown_comment_is_target_not_found() {
        let service = LikeService::new(InMemoryContent::default());

        let result = LikeUseCase::execute(
            &service,
            UserId::from(Uuid::new_v4()),
            LikeTarget::Comment(Uuid::new_v4()),
        )
        .await;

        assert!(matches!(result, Err(LikeError::TargetNotFound)));
    }
}
