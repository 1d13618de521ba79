use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::posts::{ActiveModel as PostActiveModel, Entity as PostEntity};
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::outgoing::{NewPost, PostRepository, PostRepositoryError};
use crate::shared::db::{classify_db_error, DbFailure};

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, post: NewPost) -> Result<Post, PostRepositoryError> {
        let now = chrono::Utc::now();
        let active = PostActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(post.author_id),
            content: Set(post.content),
            image_url: Set(post.image_url),
            video_url: Set(post.video_url),
            likes_count: Set(0),
            comments_count: Set(0),
            shares_count: Set(0),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| match classify_db_error(&e) {
                DbFailure::ForeignKeyViolation(_) => PostRepositoryError::UnknownAuthor,
                _ => PostRepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(inserted.to_domain())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<bool, PostRepositoryError> {
        let result = PostEntity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
