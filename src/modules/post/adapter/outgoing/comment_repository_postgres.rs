use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Set, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::comments::ActiveModel as CommentActiveModel;
use crate::post::application::domain::entities::Comment;
use crate::post::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, NewComment,
};
use crate::shared::db::{classify_db_error, DbFailure};

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CommentRepositoryError {
        CommentRepositoryError::DatabaseError(e.to_string())
    }

    fn bump_count_stmt(post_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE posts
            SET comments_count = comments_count + 1
            WHERE id = $1
            "#,
            vec![post_id.into()],
        )
    }

    fn drop_count_stmt(post_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE posts
            SET comments_count = GREATEST(comments_count - 1, 0)
            WHERE id = $1
            "#,
            vec![post_id.into()],
        )
    }

    fn delete_stmt(comment_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "DELETE FROM comments WHERE id = $1 RETURNING post_id",
            vec![comment_id.into()],
        )
    }
}

/// Constraint tying a comment to its post; other FK failures are not a missing post.
const POST_FK: &str = "fk_comments_post_id";

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(
        &self,
        comment: NewComment,
    ) -> Result<Comment, CommentRepositoryError> {
        let now = chrono::Utc::now();
        let post_id = comment.post_id;
        let active = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(post_id),
            author_id: Set(comment.author_id),
            content: Set(comment.content),
            likes_count: Set(0),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let inserted = match active.insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(match classify_db_error(&e) {
                    DbFailure::ForeignKeyViolation(msg) if msg.contains(POST_FK) => {
                        CommentRepositoryError::PostNotFound
                    }
                    _ => Self::map_db_err(e),
                });
            }
        };

        if let Err(e) = txn.execute(Self::bump_count_stmt(post_id)).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<bool, CommentRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let deleted = match txn.query_one(Self::delete_stmt(comment_id)).await {
            Ok(row) => row,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        let Some(row) = deleted else {
            let _ = txn.rollback().await;
            debug!(comment_id = %comment_id, "Delete found no comment");
            return Ok(false);
        };

        let post_id: Uuid = match row.try_get("", "post_id") {
            Ok(id) => id,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if let Err(e) = txn.execute(Self::drop_count_stmt(post_id)).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(true)
    }
}
