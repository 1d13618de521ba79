use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::auth::application::domain::entities::UserSummary;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(user.map(|m| m.to_query_result()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(user.map(|m| m.to_query_result()))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(user.map(|m| m.to_query_result()))
    }

    async fn find_summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, UserQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = UserEntity::find()
            .filter(UserColumn::Id.is_in(ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(users
            .into_iter()
            .map(|m| UserSummary {
                id: m.id,
                username: m.username,
                full_name: m.full_name,
                profile_image: m.profile_image,
            })
            .collect())
    }

    async fn list_users(&self, limit: u64) -> Result<Vec<UserQueryResult>, UserQueryError> {
        let users = UserEntity::find()
            .order_by_desc(UserColumn::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(users.iter().map(|m| m.to_query_result()).collect())
    }
}
