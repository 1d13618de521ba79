use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::CommentWithAuthor;

pub const MAX_COMMENT_LENGTH: usize = 2000;

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    post_id: Uuid,
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCommentCommandError {
    #[error("Comment cannot be empty")]
    EmptyContent,

    #[error("Comment must not exceed 2000 characters")]
    ContentTooLong,
}

impl CreateCommentCommand {
    pub fn new(post_id: Uuid, content: String) -> Result<Self, CreateCommentCommandError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CreateCommentCommandError::EmptyContent);
        }
        if content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(CreateCommentCommandError::ContentTooLong);
        }

        Ok(Self {
            post_id,
            content: content.to_string(),
        })
    }

    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Only the author can delete this comment")]
    NotAuthor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        command: CreateCommentCommand,
    ) -> Result<CommentWithAuthor, CommentError>;
}

/// Newest first. An unknown post simply has no comments.
#[async_trait]
pub trait ListCommentsUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, CommentError>;
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(&self, comment_id: Uuid, acting_user: UserId) -> Result<(), CommentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_content_is_trimmed() {
        let cmd = CreateCommentCommand::new(Uuid::new_v4(), "  nice  ".to_string()).unwrap();
        assert_eq!(cmd.content(), "nice");
    }

    #[test]
    fn empty_comment_is_rejected() {
        let result = CreateCommentCommand::new(Uuid::new_v4(), "   ".to_string());
        assert_eq!(result.unwrap_err(), CreateCommentCommandError::EmptyContent);
    }
}
