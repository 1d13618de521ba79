use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::analytics::application::domain::entities::AnalyticsSnapshot;
use crate::analytics::application::ports::incoming::use_cases::{
    AnalyticsError, LatestAnalyticsUseCase, ListAnalyticsUseCase, RecordAnalyticsUseCase,
    RecordSnapshotCommand,
};
use crate::auth::application::domain::entities::{PublicUser, UserId, UserProfile, UserSummary};
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, GetCurrentUserError, GetCurrentUserUseCase, GetUserUseCase, ListUsersUseCase,
    LoginCommand, LoginError, LoginUserUseCase, RegisterUserCommand, RegisterUserError,
    RegisterUserUseCase, UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
    UserDirectoryError,
};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenClaims, TokenError, TokenProvider, UserQuery, UserQueryError,
    UserQueryResult,
};
use crate::friendship::application::domain::entities::{
    FriendRequest, FriendRequestDecision, FriendRequestStatus, IncomingFriendRequest,
    OutgoingFriendRequest,
};
use crate::friendship::application::ports::incoming::use_cases::{
    CheckFriendshipUseCase, FriendsQueryError, ListFriendRequestsError, ListFriendsUseCase,
    ListIncomingRequestsUseCase, ListOutgoingRequestsUseCase, RespondFriendRequestError,
    RespondFriendRequestUseCase, SendFriendRequestError, SendFriendRequestUseCase,
};
use crate::post::application::domain::entities::{
    CommentWithAuthor, Like, LikeTarget, PostWithAuthor,
};
use crate::post::application::ports::incoming::use_cases::{
    CommentError, CreateCommentCommand, CreateCommentUseCase, CreatePostCommand, CreatePostError,
    CreatePostUseCase, DeleteCommentUseCase, DeletePostError, DeletePostUseCase, GetPostUseCase,
    LikeError, LikeUseCase, ListCommentsUseCase, ListPostsUseCase, ListUserPostsUseCase,
    PostFeedError, UnlikeUseCase,
};
use crate::shared::pagination::PageRequest;
use crate::story::application::domain::entities::StoryWithAuthor;
use crate::story::application::ports::incoming::use_cases::{
    CreateStoryCommand, CreateStoryError, CreateStoryUseCase, ListActiveStoriesUseCase,
    ListUserStoriesUseCase, StoryFeedError,
};

/// A non-staff, verified account row with a fresh id.
pub fn sample_user_row(username: &str, email: &str) -> UserQueryResult {
    let now = Utc::now();
    UserQueryResult {
        id: Uuid::new_v4(),
        email: email.to_string(),
        username: username.to_string(),
        password_hash: format!("hashed:{}-password", username),
        full_name: format!("{} Donor", username),
        phone: None,
        profile_image: None,
        is_staff: false,
        is_verified: true,
        created_at: now,
        updated_at: now,
    }
}

/// Deterministic hasher: `hash("pw") == "hashed:pw"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

/// Issues `token-for-{id}` and resolves every bearer except
/// [`StaticTokenProvider::REJECTED_TOKEN`] to the configured user.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    user_id: Uuid,
}

impl StaticTokenProvider {
    pub const REJECTED_TOKEN: &'static str = "rejected-token";

    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn issue_token(
        &self,
        user_id: Uuid,
        _email: &str,
        _username: &str,
    ) -> Result<String, TokenError> {
        Ok(format!("token-for-{}", user_id))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if token == Self::REJECTED_TOKEN {
            return Err(TokenError::InvalidSignature);
        }
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.user_id,
            email: "test@example.com".to_string(),
            username: "test".to_string(),
            iss: "bloodsource-test".to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
        })
    }
}

/// Fixed user table, or a query that always fails.
#[derive(Debug, Clone)]
pub struct MockUserQuery {
    users: Vec<UserQueryResult>,
    failure: Option<UserQueryError>,
}

impl MockUserQuery {
    pub fn with_users(users: Vec<UserQueryResult>) -> Self {
        Self {
            users,
            failure: None,
        }
    }

    pub fn failing(error: UserQueryError) -> Self {
        Self {
            users: vec![],
            failure: Some(error),
        }
    }

    fn check(&self) -> Result<(), UserQueryError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserQuery for MockUserQuery {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check()?;
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check()?;
        Ok(self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check()?;
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, UserQueryError> {
        self.check()?;
        Ok(self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(|u| u.to_summary())
            .collect())
    }

    async fn list_users(&self, limit: u64) -> Result<Vec<UserQueryResult>, UserQueryError> {
        self.check()?;
        let mut users = self.users.clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        users.truncate(limit as usize);
        Ok(users)
    }
}

// Default use cases for the test app state. Route tests replace the ones they hit.

pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetCurrentUserUseCase;

#[async_trait]
impl GetCurrentUserUseCase for StubGetCurrentUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, GetCurrentUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _limit: u64) -> Result<Vec<PublicUser>, UserDirectoryError> {
        Ok(vec![])
    }
}

pub struct StubGetUserUseCase;

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<PublicUser, UserDirectoryError> {
        Err(UserDirectoryError::UserNotFound)
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        Err(UpdateProfileError::UserNotFound)
    }
}

pub struct StubSendFriendRequestUseCase;

#[async_trait]
impl SendFriendRequestUseCase for StubSendFriendRequestUseCase {
    async fn execute(
        &self,
        _sender: UserId,
        _receiver_id: Uuid,
    ) -> Result<FriendRequest, SendFriendRequestError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListIncomingRequestsUseCase;

#[async_trait]
impl ListIncomingRequestsUseCase for StubListIncomingRequestsUseCase {
    async fn execute(
        &self,
        _receiver: UserId,
    ) -> Result<Vec<IncomingFriendRequest>, ListFriendRequestsError> {
        Ok(vec![])
    }
}

pub struct StubListOutgoingRequestsUseCase;

#[async_trait]
impl ListOutgoingRequestsUseCase for StubListOutgoingRequestsUseCase {
    async fn execute(
        &self,
        _sender: UserId,
    ) -> Result<Vec<OutgoingFriendRequest>, ListFriendRequestsError> {
        Ok(vec![])
    }
}

pub struct StubRespondFriendRequestUseCase;

#[async_trait]
impl RespondFriendRequestUseCase for StubRespondFriendRequestUseCase {
    async fn execute(
        &self,
        _request_id: Uuid,
        _acting_user: UserId,
        _decision: FriendRequestDecision,
    ) -> Result<FriendRequestStatus, RespondFriendRequestError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListFriendsUseCase;

#[async_trait]
impl ListFriendsUseCase for StubListFriendsUseCase {
    async fn execute(&self, _user: UserId) -> Result<Vec<UserSummary>, FriendsQueryError> {
        Ok(vec![])
    }
}

pub struct StubCheckFriendshipUseCase;

#[async_trait]
impl CheckFriendshipUseCase for StubCheckFriendshipUseCase {
    async fn execute(&self, _user: UserId, _other: Uuid) -> Result<bool, FriendsQueryError> {
        Ok(false)
    }
}

pub struct StubCreatePostUseCase;

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(
        &self,
        _author: UserId,
        _command: CreatePostCommand,
    ) -> Result<PostWithAuthor, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubPostFeedUseCase;

#[async_trait]
impl ListPostsUseCase for StubPostFeedUseCase {
    async fn execute(&self, _page: PageRequest) -> Result<Vec<PostWithAuthor>, PostFeedError> {
        Ok(vec![])
    }
}

#[async_trait]
impl ListUserPostsUseCase for StubPostFeedUseCase {
    async fn execute(
        &self,
        _author_id: Uuid,
        _limit: u64,
    ) -> Result<Vec<PostWithAuthor>, PostFeedError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetPostUseCase for StubPostFeedUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<PostWithAuthor, PostFeedError> {
        Err(PostFeedError::PostNotFound)
    }
}

pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _post_id: Uuid, _acting_user: UserId) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCommentUseCase;

#[async_trait]
impl CreateCommentUseCase for StubCommentUseCase {
    async fn execute(
        &self,
        _author: UserId,
        _command: CreateCommentCommand,
    ) -> Result<CommentWithAuthor, CommentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListCommentsUseCase for StubCommentUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<Vec<CommentWithAuthor>, CommentError> {
        Ok(vec![])
    }
}

#[async_trait]
impl DeleteCommentUseCase for StubCommentUseCase {
    async fn execute(&self, _comment_id: Uuid, _acting_user: UserId) -> Result<(), CommentError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLikeUseCase;

#[async_trait]
impl LikeUseCase for StubLikeUseCase {
    async fn execute(&self, _user: UserId, _target: LikeTarget) -> Result<Like, LikeError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UnlikeUseCase for StubLikeUseCase {
    async fn execute(&self, _user: UserId, _target: LikeTarget) -> Result<(), LikeError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCreateStoryUseCase;

#[async_trait]
impl CreateStoryUseCase for StubCreateStoryUseCase {
    async fn execute(
        &self,
        _author: UserId,
        _command: CreateStoryCommand,
    ) -> Result<StoryWithAuthor, CreateStoryError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubStoryFeedUseCase;

#[async_trait]
impl ListActiveStoriesUseCase for StubStoryFeedUseCase {
    async fn execute(&self, _limit: u64) -> Result<Vec<StoryWithAuthor>, StoryFeedError> {
        Ok(vec![])
    }
}

#[async_trait]
impl ListUserStoriesUseCase for StubStoryFeedUseCase {
    async fn execute(&self, _author_id: Uuid) -> Result<Vec<StoryWithAuthor>, StoryFeedError> {
        Ok(vec![])
    }
}

/// Every analytics call is denied, as for a non-staff caller.
pub struct StubAnalyticsUseCase;

#[async_trait]
impl ListAnalyticsUseCase for StubAnalyticsUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _days: u64,
    ) -> Result<Vec<AnalyticsSnapshot>, AnalyticsError> {
        Err(AnalyticsError::AccessDenied)
    }
}

#[async_trait]
impl LatestAnalyticsUseCase for StubAnalyticsUseCase {
    async fn execute(&self, _user: UserId) -> Result<AnalyticsSnapshot, AnalyticsError> {
        Err(AnalyticsError::AccessDenied)
    }
}

#[async_trait]
impl RecordAnalyticsUseCase for StubAnalyticsUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _command: RecordSnapshotCommand,
    ) -> Result<AnalyticsSnapshot, AnalyticsError> {
        Err(AnalyticsError::AccessDenied)
    }
}
