use std::sync::Arc;

use actix_web::web;

use crate::analytics::application::analytics_use_cases::AnalyticsUseCases;
use crate::analytics::application::ports::incoming::use_cases::{
    LatestAnalyticsUseCase, ListAnalyticsUseCase, RecordAnalyticsUseCase,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    GetCurrentUserUseCase, GetUserUseCase, ListUsersUseCase, LoginUserUseCase,
    RegisterUserUseCase, UpdateProfileUseCase,
};
use crate::friendship::application::friendship_use_cases::FriendshipUseCases;
use crate::friendship::application::ports::incoming::use_cases::{
    CheckFriendshipUseCase, ListFriendsUseCase, ListIncomingRequestsUseCase,
    ListOutgoingRequestsUseCase, RespondFriendRequestUseCase, SendFriendRequestUseCase,
};
use crate::post::application::ports::incoming::use_cases::{
    CreateCommentUseCase, CreatePostUseCase, DeleteCommentUseCase, DeletePostUseCase,
    GetPostUseCase, LikeUseCase, ListCommentsUseCase, ListPostsUseCase, ListUserPostsUseCase,
    UnlikeUseCase,
};
use crate::post::application::post_use_cases::PostUseCases;
use crate::story::application::ports::incoming::use_cases::{
    CreateStoryUseCase, ListActiveStoriesUseCase, ListUserStoriesUseCase,
};
use crate::story::application::story_use_cases::StoryUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// App state for route tests. Every use case starts as a stub; tests swap in
/// the ones their handler calls.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    friendship: FriendshipUseCases,
    post: PostUseCases,
    story: StoryUseCases,
    analytics: AnalyticsUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let post_feed = Arc::new(StubPostFeedUseCase);
        let comments = Arc::new(StubCommentUseCase);
        let likes = Arc::new(StubLikeUseCase);
        let story_feed = Arc::new(StubStoryFeedUseCase);
        let analytics = Arc::new(StubAnalyticsUseCase);

        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                current_user: Arc::new(StubGetCurrentUserUseCase),
                list_users: Arc::new(StubListUsersUseCase),
                get_user: Arc::new(StubGetUserUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
            },
            friendship: FriendshipUseCases {
                send_request: Arc::new(StubSendFriendRequestUseCase),
                incoming_requests: Arc::new(StubListIncomingRequestsUseCase),
                outgoing_requests: Arc::new(StubListOutgoingRequestsUseCase),
                respond: Arc::new(StubRespondFriendRequestUseCase),
                list_friends: Arc::new(StubListFriendsUseCase),
                check_friendship: Arc::new(StubCheckFriendshipUseCase),
            },
            post: PostUseCases {
                create_post: Arc::new(StubCreatePostUseCase),
                list_posts: post_feed.clone(),
                list_user_posts: post_feed.clone(),
                get_post: post_feed,
                delete_post: Arc::new(StubDeletePostUseCase),
                create_comment: comments.clone(),
                list_comments: comments.clone(),
                delete_comment: comments,
                like: likes.clone(),
                unlike: likes,
            },
            story: StoryUseCases {
                create_story: Arc::new(StubCreateStoryUseCase),
                list_active: story_feed.clone(),
                list_by_user: story_feed,
            },
            analytics: AnalyticsUseCases {
                list: analytics.clone(),
                latest: analytics.clone(),
                record: analytics,
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_current_user(
        mut self,
        uc: impl GetCurrentUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.current_user = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.auth.list_users = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.get_user = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_send_friend_request(
        mut self,
        uc: impl SendFriendRequestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.send_request = Arc::new(uc);
        self
    }

    pub fn with_incoming_requests(
        mut self,
        uc: impl ListIncomingRequestsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.incoming_requests = Arc::new(uc);
        self
    }

    pub fn with_outgoing_requests(
        mut self,
        uc: impl ListOutgoingRequestsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.outgoing_requests = Arc::new(uc);
        self
    }

    pub fn with_respond_friend_request(
        mut self,
        uc: impl RespondFriendRequestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.respond = Arc::new(uc);
        self
    }

    pub fn with_list_friends(
        mut self,
        uc: impl ListFriendsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.list_friends = Arc::new(uc);
        self
    }

    pub fn with_check_friendship(
        mut self,
        uc: impl CheckFriendshipUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.check_friendship = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + Send + Sync + 'static) -> Self {
        self.post.create_post = Arc::new(uc);
        self
    }

    pub fn with_list_posts(mut self, uc: impl ListPostsUseCase + Send + Sync + 'static) -> Self {
        self.post.list_posts = Arc::new(uc);
        self
    }

    pub fn with_list_user_posts(
        mut self,
        uc: impl ListUserPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.list_user_posts = Arc::new(uc);
        self
    }

    pub fn with_get_post(mut self, uc: impl GetPostUseCase + Send + Sync + 'static) -> Self {
        self.post.get_post = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + Send + Sync + 'static) -> Self {
        self.post.delete_post = Arc::new(uc);
        self
    }

    pub fn with_create_comment(
        mut self,
        uc: impl CreateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.create_comment = Arc::new(uc);
        self
    }

    pub fn with_list_comments(
        mut self,
        uc: impl ListCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.list_comments = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(
        mut self,
        uc: impl DeleteCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.delete_comment = Arc::new(uc);
        self
    }

    pub fn with_like(mut self, uc: impl LikeUseCase + Send + Sync + 'static) -> Self {
        self.post.like = Arc::new(uc);
        self
    }

    pub fn with_unlike(mut self, uc: impl UnlikeUseCase + Send + Sync + 'static) -> Self {
        self.post.unlike = Arc::new(uc);
        self
    }

    pub fn with_create_story(
        mut self,
        uc: impl CreateStoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.story.create_story = Arc::new(uc);
        self
    }

    pub fn with_list_active_stories(
        mut self,
        uc: impl ListActiveStoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.story.list_active = Arc::new(uc);
        self
    }

    pub fn with_list_user_stories(
        mut self,
        uc: impl ListUserStoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.story.list_by_user = Arc::new(uc);
        self
    }

    pub fn with_list_analytics(
        mut self,
        uc: impl ListAnalyticsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.analytics.list = Arc::new(uc);
        self
    }

    pub fn with_latest_analytics(
        mut self,
        uc: impl LatestAnalyticsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.analytics.latest = Arc::new(uc);
        self
    }

    pub fn with_record_analytics(
        mut self,
        uc: impl RecordAnalyticsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.analytics.record = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            friendship: self.friendship,
            post: self.post,
            story: self.story,
            analytics: self.analytics,
        })
    }
}
