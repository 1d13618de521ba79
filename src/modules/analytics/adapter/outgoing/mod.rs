pub mod analytics_query_postgres;
pub mod analytics_repository_postgres;
pub mod sea_orm_entity;
