use std::sync::Arc;

use crate::friendship::application::ports::incoming::use_cases::{
    CheckFriendshipUseCase, ListFriendsUseCase, ListIncomingRequestsUseCase,
    ListOutgoingRequestsUseCase, RespondFriendRequestUseCase, SendFriendRequestUseCase,
};

#[derive(Clone)]
pub struct FriendshipUseCases {
    pub send_request: Arc<dyn SendFriendRequestUseCase + Send + Sync>,
    pub incoming_requests: Arc<dyn ListIncomingRequestsUseCase + Send + Sync>,
    pub outgoing_requests: Arc<dyn ListOutgoingRequestsUseCase + Send + Sync>,
    pub respond: Arc<dyn RespondFriendRequestUseCase + Send + Sync>,
    pub list_friends: Arc<dyn ListFriendsUseCase + Send + Sync>,
    pub check_friendship: Arc<dyn CheckFriendshipUseCase + Send + Sync>,
}
