use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::friend_requests::{
    Column as RequestColumn, Entity as FriendRequestEntity,
};
use super::sea_orm_entity::friendships::{Column as FriendshipColumn, Entity as FriendshipEntity};
use crate::friendship::application::domain::entities::{
    canonical_pair, FriendRequest, FriendRequestStatus,
};
use crate::friendship::application::ports::outgoing::{FriendshipQuery, FriendshipQueryError};

#[derive(Clone, Debug)]
pub struct FriendshipQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FriendshipQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn pending_where(
        &self,
        column: RequestColumn,
        user_id: Uuid,
    ) -> Result<Vec<FriendRequest>, FriendshipQueryError> {
        let rows = FriendRequestEntity::find()
            .filter(column.eq(user_id))
            .filter(RequestColumn::Status.eq(FriendRequestStatus::Pending.as_str()))
            .order_by_desc(RequestColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }
}

fn db_error(e: sea_orm::DbErr) -> FriendshipQueryError {
    FriendshipQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl FriendshipQuery for FriendshipQueryPostgres {
    async fn find_request(
        &self,
        request_id: Uuid,
    ) -> Result<Option<FriendRequest>, FriendshipQueryError> {
        let row = FriendRequestEntity::find_by_id(request_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn pending_between(
        &self,
        a: Uuid,
        b: Uuid,
    ) -> Result<Option<FriendRequest>, FriendshipQueryError> {
        let either_direction = Condition::any()
            .add(
                Condition::all()
                    .add(RequestColumn::SenderId.eq(a))
                    .add(RequestColumn::ReceiverId.eq(b)),
            )
            .add(
                Condition::all()
                    .add(RequestColumn::SenderId.eq(b))
                    .add(RequestColumn::ReceiverId.eq(a)),
            );

        let row = FriendRequestEntity::find()
            .filter(RequestColumn::Status.eq(FriendRequestStatus::Pending.as_str()))
            .filter(either_direction)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn incoming_pending(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FriendRequest>, FriendshipQueryError> {
        self.pending_where(RequestColumn::ReceiverId, user_id).await
    }

    async fn outgoing_pending(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FriendRequest>, FriendshipQueryError> {
        self.pending_where(RequestColumn::SenderId, user_id).await
    }

    async fn friend_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, FriendshipQueryError> {
        let rows = FriendshipEntity::find()
            .filter(
                Condition::any()
                    .add(FriendshipColumn::User1Id.eq(user_id))
                    .add(FriendshipColumn::User2Id.eq(user_id)),
            )
            .order_by_desc(FriendshipColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.iter().map(|m| m.other_side(user_id)).collect())
    }

    async fn are_friends(&self, a: Uuid, b: Uuid) -> Result<bool, FriendshipQueryError> {
        let (low, high) = canonical_pair(a, b);

        let count = FriendshipEntity::find()
            .filter(FriendshipColumn::User1Id.eq(low))
            .filter(FriendshipColumn::User2Id.eq(high))
            .count(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }
}
