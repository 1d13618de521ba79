use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub likes_count: i32,
    pub comments_count: i32,
    /// No share operation exists yet; always 0.
    pub shares_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub author: UserSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub likes_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: UserSummary,
}

/// What a like points at. Serialized as `{"postId": ..}` or `{"commentId": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum LikeTarget {
    #[serde(rename = "postId")]
    Post(Uuid),
    #[serde(rename = "commentId")]
    Comment(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Provide exactly one of postId or commentId")]
pub struct AmbiguousLikeTarget;

impl LikeTarget {
    pub fn from_ids(
        post_id: Option<Uuid>,
        comment_id: Option<Uuid>,
    ) -> Result<Self, AmbiguousLikeTarget> {
        match (post_id, comment_id) {
            (Some(id), None) => Ok(LikeTarget::Post(id)),
            (None, Some(id)) => Ok(LikeTarget::Comment(id)),
            _ => Err(AmbiguousLikeTarget),
        }
    }

    pub fn post_id(&self) -> Option<Uuid> {
        match self {
            LikeTarget::Post(id) => Some(*id),
            LikeTarget::Comment(_) => None,
        }
    }

    pub fn comment_id(&self) -> Option<Uuid> {
        match self {
            LikeTarget::Comment(id) => Some(*id),
            LikeTarget::Post(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub target: LikeTarget,
    pub created_at: DateTime<Utc>,
}
