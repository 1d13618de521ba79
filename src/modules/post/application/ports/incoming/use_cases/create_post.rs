use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::PostWithAuthor;

pub const MAX_POST_LENGTH: usize = 5000;

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    content: String,
    image_url: Option<String>,
    video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreatePostCommandError {
    #[error("Post content cannot be empty")]
    EmptyContent,

    #[error("Post content must not exceed 5000 characters")]
    ContentTooLong,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreatePostCommand {
    pub fn new(
        content: String,
        image_url: Option<String>,
        video_url: Option<String>,
    ) -> Result<Self, CreatePostCommandError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CreatePostCommandError::EmptyContent);
        }
        if content.chars().count() > MAX_POST_LENGTH {
            return Err(CreatePostCommandError::ContentTooLong);
        }

        Ok(Self {
            content: content.to_string(),
            image_url: non_blank(image_url),
            video_url: non_blank(video_url),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn image_url(&self) -> Option<&String> {
        self.image_url.as_ref()
    }

    pub fn video_url(&self) -> Option<&String> {
        self.video_url.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Author account not found")]
    AuthorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        command: CreatePostCommand,
    ) -> Result<PostWithAuthor, CreatePostError>;
}
