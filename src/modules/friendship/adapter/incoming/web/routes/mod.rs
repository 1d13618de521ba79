mod friend_requests;
mod friends;

pub use friend_requests::{
    accept_friend_request_handler, list_incoming_requests_handler,
    list_outgoing_requests_handler, reject_friend_request_handler, send_friend_request_handler,
    FriendRequestResolution, SendFriendRequestDto,
};
pub use friends::{friendship_status_handler, list_friends_handler, FriendshipStatusResponse};
pub use friend_requests::{__path_accept_friend_request_handler, __path_list_incoming_requests_handler, __path_list_outgoing_requests_handler, __path_reject_friend_request_handler, __path_send_friend_request_handler};
pub use friends::{__path_friendship_status_handler, __path_list_friends_handler};
