use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    CreateUserData, ProfileChanges, UserQueryResult, UserRepository, UserRepositoryError,
};
use crate::shared::db::{classify_db_error, DbFailure};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Picks the colliding column from the violated index name.
fn map_insert_error(e: sea_orm::DbErr) -> UserRepositoryError {
    match classify_db_error(&e) {
        DbFailure::UniqueViolation(msg) => {
            let msg = msg.to_lowercase();
            if msg.contains("username") {
                UserRepositoryError::UsernameAlreadyExists
            } else {
                UserRepositoryError::EmailAlreadyExists
            }
        }
        _ => UserRepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(
        &self,
        data: CreateUserData,
    ) -> Result<UserQueryResult, UserRepositoryError> {
        let now = chrono::Utc::now();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            full_name: Set(data.full_name),
            phone: Set(data.phone),
            profile_image: Set(data.profile_image),
            is_staff: Set(data.is_staff),
            verify_code: NotSet,
            invitation_code: Set(data.invitation_code),
            is_verified: Set(data.is_verified),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(inserted.to_query_result())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Option<UserQueryResult>, UserRepositoryError> {
        let Some(existing) = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active: UserActiveModel = existing.into();
        if let Some(full_name) = changes.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(phone);
        }
        if let Some(profile_image) = changes.profile_image {
            active.profile_image = Set(profile_image);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Some(updated.to_query_result()))
    }
}
