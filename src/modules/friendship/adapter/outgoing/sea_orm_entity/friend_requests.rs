use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::friendship::application::domain::entities::{FriendRequest, FriendRequestStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "friend_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// The column has a CHECK constraint; anything else reads as pending.
    pub fn to_domain(&self) -> FriendRequest {
        FriendRequest {
            id: self.id,
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            status: self
                .status
                .parse()
                .unwrap_or(FriendRequestStatus::Pending),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
