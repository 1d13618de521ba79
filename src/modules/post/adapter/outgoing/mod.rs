pub mod comment_repository_postgres;
pub mod like_repository_postgres;
pub mod post_query_postgres;
pub mod post_repository_postgres;
pub mod sea_orm_entity;
