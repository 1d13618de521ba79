use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::stories::{Column as StoryColumn, Entity as StoryEntity};
use crate::story::application::domain::entities::Story;
use crate::story::application::ports::outgoing::{StoryQuery, StoryQueryError};

#[derive(Clone, Debug)]
pub struct StoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> StoryQueryError {
    StoryQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl StoryQuery for StoryQueryPostgres {
    async fn list_active(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Story>, StoryQueryError> {
        let rows = StoryEntity::find()
            .filter(StoryColumn::ExpiresAt.gt(now))
            .order_by_desc(StoryColumn::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn list_active_by_author(
        &self,
        author_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Story>, StoryQueryError> {
        let rows = StoryEntity::find()
            .filter(StoryColumn::AuthorId.eq(author_id))
            .filter(StoryColumn::ExpiresAt.gt(now))
            .order_by_desc(StoryColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::adapter::outgoing::sea_orm_entity::stories::Model as StoryModel;
    use crate::story::application::domain::entities::expiry_for;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn story_model(author_id: Uuid, created_at: DateTime<Utc>) -> StoryModel {
        StoryModel {
            id: Uuid::new_v4(),
            author_id,
            image_url: None,
            video_url: Some("https://cdn.example.com/s.mp4".to_string()),
            text: None,
            background_color: Some("#112233".to_string()),
            views_count: 4,
            expires_at: expiry_for(created_at).into(),
            created_at: created_at.into(),
        }
    }

    #[tokio::test]
    async fn test_list_active_maps_rows() {
        let now = Utc::now();
        let model = story_model(Uuid::new_v4(), now);
        let id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();
        let db = Arc::new(db);

        let query = StoryQueryPostgres::new(db.clone());
        let stories = query.list_active(now, 10).await.unwrap();
        drop(query);

        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].id, id);
        assert_eq!(stories[0].expires_at, expiry_for(now));
        assert_eq!(stories[0].views_count, 4);

        let log = match Arc::try_unwrap(db) {
            Ok(conn) => conn.into_transaction_log(),
            Err(_) => panic!("connection still shared"),
        };
        let rendered = format!("{:?}", log[0]);
        assert!(rendered.contains("expires_at"));
        assert!(rendered.contains("LIMIT"));
    }

    #[tokio::test]
    async fn test_list_by_author_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("pool timed out".to_string())])
            .into_connection();

        let query = StoryQueryPostgres::new(Arc::new(db));
        let result = query.list_active_by_author(Uuid::new_v4(), Utc::now()).await;

        match result.unwrap_err() {
            StoryQueryError::DatabaseError(msg) => assert!(msg.contains("pool timed out")),
        }
    }
}
