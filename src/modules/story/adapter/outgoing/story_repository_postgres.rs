use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::stories::{
    ActiveModel as StoryActiveModel, Column as StoryColumn, Entity as StoryEntity,
};
use crate::shared::db::{classify_db_error, DbFailure};
use crate::story::application::domain::entities::Story;
use crate::story::application::ports::outgoing::{
    NewStory, StoryRepository, StoryRepositoryError,
};

#[derive(Clone, Debug)]
pub struct StoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoryRepository for StoryRepositoryPostgres {
    async fn create_story(&self, story: NewStory) -> Result<Story, StoryRepositoryError> {
        let active = StoryActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(story.author_id),
            image_url: Set(story.image_url),
            video_url: Set(story.video_url),
            text: Set(story.text),
            background_color: Set(story.background_color),
            views_count: Set(0),
            expires_at: Set(story.expires_at.into()),
            created_at: Set(story.created_at.into()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| match classify_db_error(&e) {
                DbFailure::ForeignKeyViolation(_) => StoryRepositoryError::UnknownAuthor,
                _ => StoryRepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(inserted.to_domain())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, StoryRepositoryError> {
        let result = StoryEntity::delete_many()
            .filter(StoryColumn::ExpiresAt.lte(now))
            .exec(&*self.db)
            .await
            .map_err(|e| StoryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
