use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserSummary;

/// How long a story stays visible after it is posted.
pub const STORY_LIFETIME_HOURS: i64 = 24;

pub fn expiry_for(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::hours(STORY_LIFETIME_HOURS)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: Uuid,
    pub author_id: Uuid,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub text: Option<String>,
    pub background_color: Option<String>,
    pub views_count: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Story {
    /// Active strictly before `expires_at`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StoryWithAuthor {
    #[serde(flatten)]
    pub story: Story,
    pub author: UserSummary,
}
