use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Stories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Stories::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Stories::ImageUrl).text().null())
                    .col(ColumnDef::new(Stories::VideoUrl).text().null())
                    .col(ColumnDef::new(Stories::Text).text().null())
                    .col(ColumnDef::new(Stories::BackgroundColor).string_len(32).null())
                    .col(
                        ColumnDef::new(Stories::ViewsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Stories::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stories_author_id")
                            .from(Stories::Table, Stories::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reaper and active-window filter
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_stories_expires_at
                ON stories (expires_at);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_stories_author_created_at
                ON stories (author_id, created_at DESC);
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
                DROP INDEX IF EXISTS idx_stories_expires_at;
                DROP INDEX IF EXISTS idx_stories_author_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Stories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Stories {
    Table,
    Id,
    AuthorId,
    ImageUrl,
    VideoUrl,
    Text,
    BackgroundColor,
    ViewsCount,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
