pub mod analytics;
pub mod auth;
pub mod friendship;
pub mod post;
pub mod story;
