use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::story::application::domain::entities::StoryWithAuthor;

/// Matches the `background_color` column width.
pub const MAX_BACKGROUND_COLOR_LENGTH: usize = 32;

#[derive(Debug, Clone)]
pub struct CreateStoryCommand {
    image_url: Option<String>,
    video_url: Option<String>,
    text: Option<String>,
    background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateStoryCommandError {
    #[error("A story needs an image, a video or some text")]
    EmptyStory,

    #[error("Background color must not exceed 32 characters")]
    BackgroundColorTooLong,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreateStoryCommand {
    pub fn new(
        image_url: Option<String>,
        video_url: Option<String>,
        text: Option<String>,
        background_color: Option<String>,
    ) -> Result<Self, CreateStoryCommandError> {
        let image_url = non_blank(image_url);
        let video_url = non_blank(video_url);
        let text = non_blank(text);
        let background_color = non_blank(background_color);

        if image_url.is_none() && video_url.is_none() && text.is_none() {
            return Err(CreateStoryCommandError::EmptyStory);
        }
        if background_color
            .as_ref()
            .is_some_and(|c| c.chars().count() > MAX_BACKGROUND_COLOR_LENGTH)
        {
            return Err(CreateStoryCommandError::BackgroundColorTooLong);
        }

        Ok(Self {
            image_url,
            video_url,
            text,
            background_color,
        })
    }

    pub fn image_url(&self) -> Option<&String> {
        self.image_url.as_ref()
    }

    pub fn video_url(&self) -> Option<&String> {
        self.video_url.as_ref()
    }

    pub fn text(&self) -> Option<&String> {
        self.text.as_ref()
    }

    pub fn background_color(&self) -> Option<&String> {
        self.background_color.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateStoryError {
    #[error("Author account not found")]
    AuthorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Expiry is always set server-side.
#[async_trait]
pub trait CreateStoryUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        command: CreateStoryCommand,
    ) -> Result<StoryWithAuthor, CreateStoryError>;
}
