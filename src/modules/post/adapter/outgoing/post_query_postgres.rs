use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::comments::{Column as CommentColumn, Entity as CommentEntity};
use super::sea_orm_entity::posts::{Column as PostColumn, Entity as PostEntity};
use crate::post::application::domain::entities::{Comment, Post};
use crate::post::application::ports::outgoing::{PostQuery, PostQueryError};

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find_post(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
        let post = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(post.map(|m| m.to_domain()))
    }

    async fn list_posts(&self, limit: u64, offset: u64) -> Result<Vec<Post>, PostQueryError> {
        let posts = PostEntity::find()
            .order_by_desc(PostColumn::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(posts.iter().map(|m| m.to_domain()).collect())
    }

    async fn list_posts_by_author(
        &self,
        author_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Post>, PostQueryError> {
        let posts = PostEntity::find()
            .filter(PostColumn::AuthorId.eq(author_id))
            .order_by_desc(PostColumn::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(posts.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>, PostQueryError> {
        let comment = CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(comment.map(|m| m.to_domain()))
    }

    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>, PostQueryError> {
        let comments = CommentEntity::find()
            .filter(CommentColumn::PostId.eq(post_id))
            .order_by_desc(CommentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(comments.iter().map(|m| m.to_domain()).collect())
    }
}
