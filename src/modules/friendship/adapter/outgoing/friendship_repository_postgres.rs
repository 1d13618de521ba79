use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Set,
    Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::friend_requests::ActiveModel as FriendRequestActiveModel;
use crate::friendship::application::domain::entities::{
    canonical_pair, FriendRequest, FriendRequestStatus,
};
use crate::friendship::application::ports::outgoing::{
    FriendshipRepository, FriendshipRepositoryError,
};
use crate::shared::db::{classify_db_error, DbFailure};

#[derive(Clone, Debug)]
pub struct FriendshipRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FriendshipRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> FriendshipRepositoryError {
        FriendshipRepositoryError::DatabaseError(e.to_string())
    }

    /// Conditional on `pending` so a concurrent resolution turns into zero rows.
    fn resolve_stmt(request_id: Uuid, status: FriendRequestStatus) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE friend_requests
            SET status = $2, updated_at = NOW()
            WHERE id = $1
              AND status = 'pending'
            RETURNING sender_id, receiver_id
            "#,
            vec![request_id.into(), status.as_str().into()],
        )
    }

    fn read_pair(row: &QueryResult) -> Result<(Uuid, Uuid), DbErr> {
        Ok((
            row.try_get("", "sender_id")?,
            row.try_get("", "receiver_id")?,
        ))
    }

    fn insert_friendship_stmt(a: Uuid, b: Uuid) -> Statement {
        let (user1_id, user2_id) = canonical_pair(a, b);
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO friendships (id, user1_id, user2_id, created_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user1_id, user2_id) DO NOTHING
            "#,
            vec![Uuid::new_v4().into(), user1_id.into(), user2_id.into()],
        )
    }
}

#[async_trait]
impl FriendshipRepository for FriendshipRepositoryPostgres {
    async fn create_request(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<FriendRequest, FriendshipRepositoryError> {
        let now = chrono::Utc::now();
        let active = FriendRequestActiveModel {
            id: Set(Uuid::new_v4()),
            sender_id: Set(sender_id),
            receiver_id: Set(receiver_id),
            status: Set(FriendRequestStatus::Pending.as_str().to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            match classify_db_error(&e) {
                DbFailure::UniqueViolation(_) => FriendshipRepositoryError::DuplicatePending,
                DbFailure::ForeignKeyViolation(_) => FriendshipRepositoryError::UnknownUser,
                DbFailure::Other(msg) => FriendshipRepositoryError::DatabaseError(msg),
            }
        })?;

        Ok(inserted.to_domain())
    }

    async fn accept_request(&self, request_id: Uuid) -> Result<bool, FriendshipRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let updated = match txn
            .query_one(Self::resolve_stmt(request_id, FriendRequestStatus::Accepted))
            .await
        {
            Ok(row) => row,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        let Some(row) = updated else {
            let _ = txn.rollback().await;
            debug!(request_id = %request_id, "Accept found no pending request");
            return Ok(false);
        };

        let (sender_id, receiver_id) = match Self::read_pair(&row) {
            Ok(pair) => pair,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if let Err(e) = txn
            .execute(Self::insert_friendship_stmt(sender_id, receiver_id))
            .await
        {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(true)
    }

    async fn reject_request(&self, request_id: Uuid) -> Result<bool, FriendshipRepositoryError> {
        let row = self
            .db
            .query_one(Self::resolve_stmt(request_id, FriendRequestStatus::Rejected))
            .await
            .map_err(Self::map_db_err)?;

        Ok(row.is_some())
    }
}
