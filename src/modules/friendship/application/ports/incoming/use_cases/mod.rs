mod friends;
mod list_friend_requests;
mod respond_friend_request;
mod send_friend_request;

pub use friends::{CheckFriendshipUseCase, FriendsQueryError, ListFriendsUseCase};
pub use list_friend_requests::{
    ListFriendRequestsError, ListIncomingRequestsUseCase, ListOutgoingRequestsUseCase,
};
pub use respond_friend_request::{RespondFriendRequestError, RespondFriendRequestUseCase};
pub use send_friend_request::{SendFriendRequestError, SendFriendRequestUseCase};
