use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::post::application::domain::entities::{Like, LikeTarget};

/// Exactly one of `post_id` / `comment_id` is set (CHECK constraint).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<Like, DbErr> {
        let target = LikeTarget::from_ids(self.post_id, self.comment_id)
            .map_err(|e| DbErr::Type(format!("like {}: {}", self.id, e)))?;

        Ok(Like {
            id: self.id,
            user_id: self.user_id,
            target,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
