pub mod api;
pub mod clock;
pub mod db;
pub mod pagination;
