pub mod friendship_query;
pub mod friendship_repository;

pub use friendship_query::{FriendshipQuery, FriendshipQueryError};
pub use friendship_repository::{FriendshipRepository, FriendshipRepositoryError};
