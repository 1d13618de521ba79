use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Set, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::likes::ActiveModel as LikeActiveModel;
use crate::post::application::domain::entities::{Like, LikeTarget};
use crate::post::application::ports::outgoing::{LikeRepository, LikeRepositoryError};
use crate::shared::db::{classify_db_error, DbFailure};

#[derive(Clone, Debug)]
pub struct LikeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LikeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> LikeRepositoryError {
        LikeRepositoryError::DatabaseError(e.to_string())
    }

    fn increment_stmt(target: LikeTarget) -> Statement {
        let (sql, id) = match target {
            LikeTarget::Post(id) => (
                "UPDATE posts SET likes_count = likes_count + 1 WHERE id = $1",
                id,
            ),
            LikeTarget::Comment(id) => (
                "UPDATE comments SET likes_count = likes_count + 1 WHERE id = $1",
                id,
            ),
        };
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, vec![id.into()])
    }

    /// Never lets a counter go below zero.
    fn decrement_stmt(target: LikeTarget) -> Statement {
        let (sql, id) = match target {
            LikeTarget::Post(id) => (
                "UPDATE posts SET likes_count = GREATEST(likes_count - 1, 0) WHERE id = $1",
                id,
            ),
            LikeTarget::Comment(id) => (
                "UPDATE comments SET likes_count = GREATEST(likes_count - 1, 0) WHERE id = $1",
                id,
            ),
        };
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, vec![id.into()])
    }

    fn delete_stmt(user_id: Uuid, target: LikeTarget) -> Statement {
        let (sql, id) = match target {
            LikeTarget::Post(id) => (
                "DELETE FROM likes WHERE user_id = $1 AND post_id = $2 RETURNING id",
                id,
            ),
            LikeTarget::Comment(id) => (
                "DELETE FROM likes WHERE user_id = $1 AND comment_id = $2 RETURNING id",
                id,
            ),
        };
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            vec![user_id.into(), id.into()],
        )
    }
}

/// Constraint on the liking user; every other FK on `likes` names the target.
const USER_FK: &str = "fk_likes_user_id";

#[async_trait]
impl LikeRepository for LikeRepositoryPostgres {
    async fn create_like(
        &self,
        user_id: Uuid,
        target: LikeTarget,
    ) -> Result<Like, LikeRepositoryError> {
        let active = LikeActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            post_id: Set(target.post_id()),
            comment_id: Set(target.comment_id()),
            created_at: Set(chrono::Utc::now().into()),
        };

        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let inserted = match active.insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(match classify_db_error(&e) {
                    DbFailure::UniqueViolation(_) => LikeRepositoryError::AlreadyLiked,
                    DbFailure::ForeignKeyViolation(msg) if msg.contains(USER_FK) => {
                        LikeRepositoryError::DatabaseError(msg)
                    }
                    DbFailure::ForeignKeyViolation(_) => LikeRepositoryError::TargetNotFound,
                    DbFailure::Other(msg) => LikeRepositoryError::DatabaseError(msg),
                });
            }
        };

        let like = match inserted.to_domain() {
            Ok(like) => like,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if let Err(e) = txn.execute(Self::increment_stmt(target)).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(like)
    }

    async fn delete_like(
        &self,
        user_id: Uuid,
        target: LikeTarget,
    ) -> Result<bool, LikeRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let deleted = match txn.query_one(Self::delete_stmt(user_id, target)).await {
            Ok(row) => row,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if deleted.is_none() {
            let _ = txn.rollback().await;
            debug!(user_id = %user_id, ?target, "Unlike found nothing to remove");
            return Ok(false);
        }

        if let Err(e) = txn.execute(Self::decrement_stmt(target)).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(true)
    }
}
