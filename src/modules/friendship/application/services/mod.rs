mod friend_list_service;
mod friend_request_listing_service;
mod respond_friend_request_service;
mod send_friend_request_service;

pub use friend_list_service::FriendListService;
pub use friend_request_listing_service::FriendRequestListingService;
pub use respond_friend_request_service::RespondFriendRequestService;
pub use send_friend_request_service::SendFriendRequestService;
