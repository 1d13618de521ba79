use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::outgoing::ProfileChanges;

pub const MAX_FULL_NAME_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 32;

/// Validated profile edit. Absent fields stay as they are; a blank phone or
/// profile image clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfileCommand {
    changes: ProfileChanges,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("At least one of fullName, phone or profileImage is required")]
    NothingToUpdate,

    #[error("Full name cannot be empty")]
    EmptyFullName,

    #[error("Full name must not exceed 100 characters")]
    FullNameTooLong,

    #[error("Phone must not exceed 32 characters")]
    PhoneTooLong,
}

fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

impl UpdateProfileCommand {
    pub fn new(
        full_name: Option<String>,
        phone: Option<String>,
        profile_image: Option<String>,
    ) -> Result<Self, UpdateProfileCommandError> {
        if full_name.is_none() && phone.is_none() && profile_image.is_none() {
            return Err(UpdateProfileCommandError::NothingToUpdate);
        }

        let full_name = match full_name {
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(UpdateProfileCommandError::EmptyFullName);
                }
                if name.chars().count() > MAX_FULL_NAME_LENGTH {
                    return Err(UpdateProfileCommandError::FullNameTooLong);
                }
                Some(name.to_string())
            }
            None => None,
        };

        let phone = clearable(phone);
        if let Some(Some(number)) = &phone {
            if number.chars().count() > MAX_PHONE_LENGTH {
                return Err(UpdateProfileCommandError::PhoneTooLong);
            }
        }

        Ok(Self {
            changes: ProfileChanges {
                full_name,
                phone,
                profile_image: clearable(profile_image),
            },
        })
    }

    pub fn changes(&self) -> &ProfileChanges {
        &self.changes
    }

    pub fn into_changes(self) -> ProfileChanges {
        self.changes
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError>;
}
