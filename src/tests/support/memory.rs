//! In-memory implementations of the outgoing ports.
//!
//! Clones share storage, so a test can hand one copy to a service and keep
//! another for assertions. Rows are kept in insertion order; "newest first"
//! listings walk that order backwards.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserSummary;
use crate::auth::application::ports::outgoing::{
    CreateUserData, ProfileChanges, UserQuery, UserQueryError, UserQueryResult, UserRepository,
    UserRepositoryError,
};
use crate::friendship::application::domain::entities::{
    canonical_pair, FriendRequest, FriendRequestStatus,
};
use crate::friendship::application::ports::outgoing::{
    FriendshipQuery, FriendshipQueryError, FriendshipRepository, FriendshipRepositoryError,
};
use crate::post::application::domain::entities::{Comment, Like, LikeTarget, Post};
use crate::post::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, LikeRepository, LikeRepositoryError, NewComment,
    NewPost, PostQuery, PostQueryError, PostRepository, PostRepositoryError,
};
use crate::story::application::domain::entities::{expiry_for, Story};
use crate::story::application::ports::outgoing::{
    NewStory, StoryQuery, StoryQueryError, StoryRepository, StoryRepositoryError,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUsers {
    rows: Arc<Mutex<Vec<UserQueryResult>>>,
}

impl InMemoryUsers {
    /// Registers `username` with `{username}@example.com` and returns its id.
    pub async fn add(&self, username: &str) -> Uuid {
        self.create_user(CreateUserData {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: format!("hashed:{}-password", username),
            full_name: format!("{} Donor", username),
            phone: None,
            profile_image: None,
            invitation_code: None,
            is_staff: false,
            is_verified: true,
        })
        .await
        .expect("username is unique in this test")
        .id
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.username == username).cloned())
    }

    async fn find_summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, UserQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(|u| u.to_summary())
            .collect())
    }

    async fn list_users(&self, limit: u64) -> Result<Vec<UserQueryResult>, UserQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().rev().take(limit as usize).cloned().collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(
        &self,
        data: CreateUserData,
    ) -> Result<UserQueryResult, UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|u| u.email.eq_ignore_ascii_case(&data.email)) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }
        if rows.iter().any(|u| u.username == data.username) {
            return Err(UserRepositoryError::UsernameAlreadyExists);
        }

        let now = Utc::now();
        let row = UserQueryResult {
            id: Uuid::new_v4(),
            email: data.email,
            username: data.username,
            password_hash: data.password_hash,
            full_name: data.full_name,
            phone: data.phone,
            profile_image: data.profile_image,
            is_staff: data.is_staff,
            is_verified: data.is_verified,
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Option<UserQueryResult>, UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|u| u.id == user_id) else {
            return Ok(None);
        };

        if let Some(full_name) = changes.full_name {
            row.full_name = full_name;
        }
        if let Some(phone) = changes.phone {
            row.phone = phone;
        }
        if let Some(profile_image) = changes.profile_image {
            row.profile_image = profile_image;
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }
}

#[derive(Debug, Default)]
struct SocialGraphState {
    requests: Vec<FriendRequest>,
    friendships: Vec<(Uuid, Uuid)>,
}

/// Friend requests plus friendship rows. Rows inserted through
/// [`InMemorySocialGraph::insert_friendship_row`] keep the given orientation.
#[derive(Debug, Clone, Default)]
pub struct InMemorySocialGraph {
    state: Arc<Mutex<SocialGraphState>>,
}

impl InMemorySocialGraph {
    pub fn insert_friendship_row(&self, a: Uuid, b: Uuid) {
        self.state.lock().unwrap().friendships.push((a, b));
    }

    pub fn friendship_row_count(&self) -> usize {
        self.state.lock().unwrap().friendships.len()
    }

    fn resolve(&self, request_id: Uuid, status: FriendRequestStatus) -> Option<FriendRequest> {
        let mut state = self.state.lock().unwrap();
        let request = state
            .requests
            .iter_mut()
            .find(|r| r.id == request_id && r.status == FriendRequestStatus::Pending)?;
        request.status = status;
        request.updated_at = Utc::now();
        Some(request.clone())
    }
}

#[async_trait]
impl FriendshipQuery for InMemorySocialGraph {
    async fn find_request(
        &self,
        request_id: Uuid,
    ) -> Result<Option<FriendRequest>, FriendshipQueryError> {
        let found = {
            let state = self.state.lock().unwrap();
            state.requests.iter().find(|r| r.id == request_id).cloned()
        };
        // Lets a concurrent caller read the same snapshot before anyone writes.
        tokio::task::yield_now().await;
        Ok(found)
    }

    async fn pending_between(
        &self,
        a: Uuid,
        b: Uuid,
    ) -> Result<Option<FriendRequest>, FriendshipQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .requests
            .iter()
            .find(|r| r.status == FriendRequestStatus::Pending && r.involves(a, b))
            .cloned())
    }

    async fn incoming_pending(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FriendRequest>, FriendshipQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .requests
            .iter()
            .rev()
            .filter(|r| r.receiver_id == user_id && r.status == FriendRequestStatus::Pending)
            .cloned()
            .collect())
    }

    async fn outgoing_pending(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FriendRequest>, FriendshipQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .requests
            .iter()
            .rev()
            .filter(|r| r.sender_id == user_id && r.status == FriendRequestStatus::Pending)
            .cloned()
            .collect())
    }

    async fn friend_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, FriendshipQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .friendships
            .iter()
            .rev()
            .filter_map(|&(a, b)| match (a == user_id, b == user_id) {
                (true, _) => Some(b),
                (_, true) => Some(a),
                _ => None,
            })
            .collect())
    }

    async fn are_friends(&self, a: Uuid, b: Uuid) -> Result<bool, FriendshipQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .friendships
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a)))
    }
}

#[async_trait]
impl FriendshipRepository for InMemorySocialGraph {
    async fn create_request(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<FriendRequest, FriendshipRepositoryError> {
        let mut state = self.state.lock().unwrap();

        if state
            .requests
            .iter()
            .any(|r| r.status == FriendRequestStatus::Pending && r.involves(sender_id, receiver_id))
        {
            return Err(FriendshipRepositoryError::DuplicatePending);
        }

        let now = Utc::now();
        let request = FriendRequest {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            status: FriendRequestStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        state.requests.push(request.clone());
        Ok(request)
    }

    async fn accept_request(&self, request_id: Uuid) -> Result<bool, FriendshipRepositoryError> {
        let Some(request) = self.resolve(request_id, FriendRequestStatus::Accepted) else {
            return Ok(false);
        };

        let pair = canonical_pair(request.sender_id, request.receiver_id);
        let mut state = self.state.lock().unwrap();
        if !state
            .friendships
            .iter()
            .any(|&(a, b)| canonical_pair(a, b) == pair)
        {
            state.friendships.push(pair);
        }
        Ok(true)
    }

    async fn reject_request(&self, request_id: Uuid) -> Result<bool, FriendshipRepositoryError> {
        Ok(self
            .resolve(request_id, FriendRequestStatus::Rejected)
            .is_some())
    }
}

#[derive(Debug, Default)]
struct ContentState {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    likes: Vec<Like>,
}

impl ContentState {
    fn post_mut(&mut self, post_id: Uuid) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == post_id)
    }

    fn comment_mut(&mut self, comment_id: Uuid) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == comment_id)
    }

    fn adjust_likes(&mut self, target: LikeTarget, delta: i32) {
        let counter = match target {
            LikeTarget::Post(id) => self.post_mut(id).map(|p| &mut p.likes_count),
            LikeTarget::Comment(id) => self.comment_mut(id).map(|c| &mut c.likes_count),
        };
        if let Some(count) = counter {
            *count = (*count + delta).max(0);
        }
    }
}

/// Posts, comments and likes with their denormalized counters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContent {
    state: Arc<Mutex<ContentState>>,
}

impl InMemoryContent {
    pub async fn seed_post(&self, author_id: Uuid, content: &str) -> Post {
        self.create_post(NewPost {
            author_id,
            content: content.to_string(),
            image_url: None,
            video_url: None,
        })
        .await
        .expect("in-memory insert")
    }

    pub fn post_snapshot(&self, post_id: Uuid) -> Option<Post> {
        let state = self.state.lock().unwrap();
        state.posts.iter().find(|p| p.id == post_id).cloned()
    }
}

#[async_trait]
impl PostQuery for InMemoryContent {
    async fn find_post(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
        Ok(self.post_snapshot(post_id))
    }

    async fn list_posts(&self, limit: u64, offset: u64) -> Result<Vec<Post>, PostQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_posts_by_author(
        &self,
        author_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Post>, PostQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .rev()
            .filter(|p| p.author_id == author_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>, PostQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.comments.iter().find(|c| c.id == comment_id).cloned())
    }

    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>, PostQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .rev()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryContent {
    async fn create_post(&self, post: NewPost) -> Result<Post, PostRepositoryError> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            author_id: post.author_id,
            content: post.content,
            image_url: post.image_url,
            video_url: post.video_url,
            likes_count: 0,
            comments_count: 0,
            shares_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.state.lock().unwrap().posts.push(post.clone());
        Ok(post)
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<bool, PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.posts.len();
        state.posts.retain(|p| p.id != post_id);
        if state.posts.len() == before {
            return Ok(false);
        }

        let removed_comments: Vec<Uuid> = state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .map(|c| c.id)
            .collect();
        state.comments.retain(|c| c.post_id != post_id);
        state.likes.retain(|l| match l.target {
            LikeTarget::Post(id) => id != post_id,
            LikeTarget::Comment(id) => !removed_comments.contains(&id),
        });
        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for InMemoryContent {
    async fn create_comment(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let post = state
            .post_mut(comment.post_id)
            .ok_or(CommentRepositoryError::PostNotFound)?;
        post.comments_count += 1;

        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id: comment.post_id,
            author_id: comment.author_id,
            content: comment.content,
            likes_count: 0,
            created_at: now,
            updated_at: now,
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<bool, CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let Some(index) = state.comments.iter().position(|c| c.id == comment_id) else {
            return Ok(false);
        };
        let removed = state.comments.remove(index);
        state
            .likes
            .retain(|l| l.target != LikeTarget::Comment(comment_id));
        if let Some(post) = state.post_mut(removed.post_id) {
            post.comments_count = (post.comments_count - 1).max(0);
        }
        Ok(true)
    }
}

#[async_trait]
impl LikeRepository for InMemoryContent {
    async fn create_like(
        &self,
        user_id: Uuid,
        target: LikeTarget,
    ) -> Result<Like, LikeRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let exists = match target {
            LikeTarget::Post(id) => state.posts.iter().any(|p| p.id == id),
            LikeTarget::Comment(id) => state.comments.iter().any(|c| c.id == id),
        };
        if !exists {
            return Err(LikeRepositoryError::TargetNotFound);
        }
        if state
            .likes
            .iter()
            .any(|l| l.user_id == user_id && l.target == target)
        {
            return Err(LikeRepositoryError::AlreadyLiked);
        }

        let like = Like {
            id: Uuid::new_v4(),
            user_id,
            target,
            created_at: Utc::now(),
        };
        state.likes.push(like.clone());
        state.adjust_likes(target, 1);
        Ok(like)
    }

    async fn delete_like(
        &self,
        user_id: Uuid,
        target: LikeTarget,
    ) -> Result<bool, LikeRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let Some(index) = state
            .likes
            .iter()
            .position(|l| l.user_id == user_id && l.target == target)
        else {
            return Ok(false);
        };
        state.likes.remove(index);
        state.adjust_likes(target, -1);
        Ok(true)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStories {
    rows: Arc<Mutex<Vec<Story>>>,
}

impl InMemoryStories {
    /// A text story posted at `created_at`, expiring one day later.
    pub fn seed(&self, author_id: Uuid, created_at: DateTime<Utc>) -> Story {
        let story = Story {
            id: Uuid::new_v4(),
            author_id,
            image_url: None,
            video_url: None,
            text: Some("on my way to donate".to_string()),
            background_color: None,
            views_count: 0,
            expires_at: expiry_for(created_at),
            created_at,
        };
        self.rows.lock().unwrap().push(story.clone());
        story
    }

    pub fn story_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn active(&self, now: DateTime<Utc>, author_id: Option<Uuid>) -> Vec<Story> {
        let rows = self.rows.lock().unwrap();
        let mut active: Vec<Story> = rows
            .iter()
            .filter(|s| s.is_active_at(now))
            .filter(|s| author_id.map_or(true, |id| s.author_id == id))
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        active
    }
}

#[async_trait]
impl StoryQuery for InMemoryStories {
    async fn list_active(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Story>, StoryQueryError> {
        let mut stories = self.active(now, None);
        stories.truncate(limit as usize);
        Ok(stories)
    }

    async fn list_active_by_author(
        &self,
        author_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Story>, StoryQueryError> {
        Ok(self.active(now, Some(author_id)))
    }
}

#[async_trait]
impl StoryRepository for InMemoryStories {
    async fn create_story(&self, story: NewStory) -> Result<Story, StoryRepositoryError> {
        let story = Story {
            id: Uuid::new_v4(),
            author_id: story.author_id,
            image_url: story.image_url,
            video_url: story.video_url,
            text: story.text,
            background_color: story.background_color,
            views_count: 0,
            expires_at: story.expires_at,
            created_at: story.created_at,
        };
        self.rows.lock().unwrap().push(story.clone());
        Ok(story)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, StoryRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.expires_at > now);
        Ok((before - rows.len()) as u64)
    }
}
