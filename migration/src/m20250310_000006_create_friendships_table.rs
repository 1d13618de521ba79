use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Friendships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Friendships::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Friendships::User1Id).uuid().not_null())
                    .col(ColumnDef::new(Friendships::User2Id).uuid().not_null())
                    .col(
                        ColumnDef::new(Friendships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendships_user1_id")
                            .from(Friendships::Table, Friendships::User1Id)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendships_user2_id")
                            .from(Friendships::Table, Friendships::User2Id)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Rows are stored with user1_id < user2_id
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE friendships
                ADD CONSTRAINT chk_friendships_canonical
                CHECK (user1_id < user2_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_friendships_pair
                ON friendships (user1_id, user2_id);

                CREATE INDEX idx_friendships_user2
                ON friendships (user2_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_friendships_pair;
                DROP INDEX IF EXISTS idx_friendships_user2;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Friendships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Friendships {
    Table,
    Id,
    User1Id,
    User2Id,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
