pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_000001_create_posts_table;
mod m20250310_000002_create_comments_table;
mod m20250310_000003_create_likes_table;
mod m20250310_000004_create_stories_table;
mod m20250310_000005_create_friend_requests_table;
mod m20250310_000006_create_friendships_table;
mod m20250310_000007_create_analytics_snapshots_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_000001_create_posts_table::Migration),
            Box::new(m20250310_000002_create_comments_table::Migration),
            Box::new(m20250310_000003_create_likes_table::Migration),
            Box::new(m20250310_000004_create_stories_table::Migration),
            Box::new(m20250310_000005_create_friend_requests_table::Migration),
            Box::new(m20250310_000006_create_friendships_table::Migration),
            Box::new(m20250310_000007_create_analytics_snapshots_table::Migration),
        ]
    }
}
