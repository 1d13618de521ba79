use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{PublicUser, UserProfile, UserSummary};

/// Full user row as read from storage, password hash included.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub is_staff: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserQueryResult {
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            profile_image: self.profile_image.clone(),
            is_staff: self.is_staff,
            is_verified: self.is_verified,
            created_at: self.created_at,
        }
    }

    pub fn to_summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            profile_image: self.profile_image.clone(),
        }
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            profile_image: self.profile_image.clone(),
            is_staff: self.is_staff,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// Batched lookup; ids that do not resolve are simply absent from the result.
    async fn find_summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, UserQueryError>;

    /// Newest accounts first.
    async fn list_users(&self, limit: u64) -> Result<Vec<UserQueryResult>, UserQueryError>;

    /// One round trip for a whole page of authors/senders, keyed by id.
    async fn summaries_by_id(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, UserSummary>, UserQueryError> {
        let mut unique = ids.to_vec();
        unique.sort();
        unique.dedup();

        Ok(self
            .find_summaries(&unique)
            .await?
            .into_iter()
            .map(|summary| (summary.id, summary))
            .collect())
    }
}
