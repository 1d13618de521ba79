pub mod friend_requests;
pub mod friendships;
