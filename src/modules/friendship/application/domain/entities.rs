use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserSummary;

/// `pending` resolves to `accepted` or `rejected` exactly once; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl FriendRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendRequestStatus::Pending => "pending",
            FriendRequestStatus::Accepted => "accepted",
            FriendRequestStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, FriendRequestStatus::Pending)
    }
}

impl fmt::Display for FriendRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown friend request status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for FriendRequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FriendRequestStatus::Pending),
            "accepted" => Ok(FriendRequestStatus::Accepted),
            "rejected" => Ok(FriendRequestStatus::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// What the receiver decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendRequestDecision {
    Accept,
    Reject,
}

impl FriendRequestDecision {
    pub fn resulting_status(&self) -> FriendRequestStatus {
        match self {
            FriendRequestDecision::Accept => FriendRequestStatus::Accepted,
            FriendRequestDecision::Reject => FriendRequestStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub status: FriendRequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FriendRequest {
    pub fn involves(&self, a: Uuid, b: Uuid) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}

/// Request as seen by its receiver.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IncomingFriendRequest {
    #[serde(flatten)]
    pub request: FriendRequest,
    pub sender: UserSummary,
}

/// Request as seen by its sender.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OutgoingFriendRequest {
    #[serde(flatten)]
    pub request: FriendRequest,
    pub receiver: UserSummary,
}

/// Friendships are stored once per unordered pair, smaller id first.
pub fn canonical_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
