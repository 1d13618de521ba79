use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::{
        incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
        outgoing::UserRepository,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        let updated = self
            .repository
            .update_profile(user_id.value(), command.into_changes())
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::UserNotFound)?;

        info!(user_id = %updated.id, "Profile updated");
        Ok(updated.to_profile())
    }
}
