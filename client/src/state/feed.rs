//! Home feed state.
//!
//! The feed is fetched once per mount and after a new post is created. There
//! is no paging or caching.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::error::ApiError;
use crate::net::types::Post;

pub const FEED_FAILED_MESSAGE: &str = "Failed to fetch posts. Please try again.";
pub const FEED_EMPTY_MESSAGE: &str = "No posts available. Be the first to post something!";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FeedState {
    #[default]
    Loading,
    Loaded(Vec<Post>),
    Failed(ApiError),
}

impl FeedState {
    pub fn from_result(result: Result<Vec<Post>, ApiError>) -> Self {
        match result {
            Ok(posts) => Self::Loaded(posts),
            Err(e) => Self::Failed(e),
        }
    }

    pub fn posts(&self) -> &[Post] {
        match self {
            Self::Loaded(posts) => posts,
            _ => &[],
        }
    }

    /// Banner text, if the feed failed.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Failed(e) => Some(e.user_message(FEED_FAILED_MESSAGE)),
            _ => None,
        }
    }

    /// Whether to show the empty-feed hint.
    pub fn is_empty(&self) -> bool {
        !matches!(self, Self::Loading) && self.posts().is_empty()
    }
}
