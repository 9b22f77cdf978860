//! Wire DTOs for the REST API.
//!
//! DESIGN
//! ======
//! The API mixes numeric and string identifiers and uses both snake_case and
//! camelCase field names. DTOs normalize ids to `String` on the way in so the
//! rest of the client only deals with one id type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A post in the feed or on a profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Author handle. Absent on profile listings, which are single-author.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub content: Option<String>,
    /// Attached image URL, if any.
    #[serde(default)]
    pub media_url: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Post {
    pub fn has_media(&self) -> bool {
        self.media_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// A comment under a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `GET /api/likes/{post_id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LikesResponse {
    /// One entry per like; only the count is used.
    #[serde(default)]
    pub likes: Vec<serde_json::Value>,
    #[serde(rename = "currentUserLiked", default)]
    pub current_user_liked: bool,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/comments/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateCommentRequest {
    #[serde(rename = "postId")]
    pub post_id: String,
    #[serde(rename = "commentText")]
    pub comment_text: String,
}

/// Body of `POST /api/follows/follow` and `/api/follows/unfollow`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FollowRequest {
    #[serde(rename = "followerId")]
    pub follower_id: String,
    #[serde(rename = "followingId")]
    pub following_id: String,
}

/// Response of `GET /api/follows/check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct FollowCheck {
    #[serde(rename = "isFollowing", default)]
    pub is_following: bool,
}

/// A user as shown in search results and profile headers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

/// Response of `GET /api/users/search`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub users: Vec<UserSummary>,
}

/// Follower/following/post counters on a profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub post_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub followers_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub following_count: u64,
}

/// Response of `GET /api/users/{id}/profile`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserProfile {
    pub user: UserSummary,
    #[serde(default)]
    pub stats: ProfileStats,
    #[serde(default)]
    pub posts: Vec<Post>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

// Counters arrive as numbers or numeric strings (Postgres COUNT).
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("count {n} is not a non-negative integer"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("count {s:?} is not numeric"))),
        serde_json::Value::Null => Ok(0),
        other => Err(D::Error::custom(format!("expected count, got {other}"))),
    }
}
