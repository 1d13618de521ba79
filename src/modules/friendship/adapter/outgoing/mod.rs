pub mod friendship_query_postgres;
pub mod friendship_repository_postgres;
pub mod sea_orm_entity;
