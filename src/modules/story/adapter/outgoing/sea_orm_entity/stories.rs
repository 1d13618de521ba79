use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::story::application::domain::entities::Story;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub video_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub text: Option<String>,
    pub background_color: Option<String>,
    pub views_count: i32,
    pub expires_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Story {
        Story {
            id: self.id,
            author_id: self.author_id,
            image_url: self.image_url.clone(),
            video_url: self.video_url.clone(),
            text: self.text.clone(),
            background_color: self.background_color.clone(),
            views_count: self.views_count,
            expires_at: self.expires_at.with_timezone(&chrono::Utc),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
