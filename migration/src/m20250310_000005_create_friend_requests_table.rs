use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FriendRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FriendRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FriendRequests::SenderId).uuid().not_null())
                    .col(ColumnDef::new(FriendRequests::ReceiverId).uuid().not_null())
                    .col(
                        ColumnDef::new(FriendRequests::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(FriendRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(FriendRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_requests_sender_id")
                            .from(FriendRequests::Table, FriendRequests::SenderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_requests_receiver_id")
                            .from(FriendRequests::Table, FriendRequests::ReceiverId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE friend_requests
                ADD CONSTRAINT chk_friend_requests_status
                CHECK (status IN ('pending', 'accepted', 'rejected'));

                ALTER TABLE friend_requests
                ADD CONSTRAINT chk_friend_requests_not_self
                CHECK (sender_id <> receiver_id);
                "#,
            )
            .await?;

        // At most one pending request per unordered pair
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_friend_requests_pending_pair
                ON friend_requests (LEAST(sender_id, receiver_id), GREATEST(sender_id, receiver_id))
                WHERE status = 'pending';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_friend_requests_receiver_pending
                ON friend_requests (receiver_id, created_at DESC)
                WHERE status = 'pending';

                CREATE INDEX idx_friend_requests_sender_pending
                ON friend_requests (sender_id, created_at DESC)
                WHERE status = 'pending';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_friend_requests_updated_at
                BEFORE UPDATE ON friend_requests
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_friend_requests_updated_at ON friend_requests",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_friend_requests_pending_pair;
                DROP INDEX IF EXISTS idx_friend_requests_receiver_pending;
                DROP INDEX IF EXISTS idx_friend_requests_sender_pending;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FriendRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FriendRequests {
    Table,
    Id,
    SenderId,
    ReceiverId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
