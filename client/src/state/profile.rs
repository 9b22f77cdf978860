//! Profile page state: the aggregate profile and the follow relationship.
//!
//! Unlike likes, follow changes are not optimistic. Counters move only after
//! the server has accepted the follow/unfollow.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::error::ApiError;
use crate::net::types::{Post, UserProfile};

pub const PROFILE_FAILED_MESSAGE: &str = "Failed to load profile. Please try again.";

/// Profile post tabs: image posts vs. text-only posts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Posts,
    Threads,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub loading: bool,
    pub profile: Option<UserProfile>,
    pub error: Option<ApiError>,
    pub following: bool,
    pub follow_busy: bool,
    pub tab: ProfileTab,
}

/// Whether the follow relationship should be fetched for this view.
pub fn should_check_follow(viewer_id: Option<&str>, profile_user_id: &str) -> bool {
    viewer_id.is_some_and(|viewer| viewer != profile_user_id)
}

impl ProfileState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn load(&mut self, result: Result<UserProfile, ApiError>) {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
            }
            Err(e) => {
                self.profile = None;
                self.error = Some(e);
            }
        }
    }

    /// Whether the follow button applies (someone else's profile, signed in).
    pub fn can_follow(&self, viewer_id: Option<&str>) -> bool {
        self.profile
            .as_ref()
            .is_some_and(|p| should_check_follow(viewer_id, &p.user.id))
    }

    /// Apply the result of a follow/unfollow issued while `was_following`.
    /// Only a successful response changes anything.
    pub fn apply_follow_result(&mut self, was_following: bool, result: &Result<(), ApiError>) -> bool {
        self.follow_busy = false;
        if result.is_err() || self.following != was_following {
            return false;
        }
        self.following = !was_following;
        if let Some(profile) = self.profile.as_mut() {
            let followers = &mut profile.stats.followers_count;
            *followers = if was_following { followers.saturating_sub(1) } else { *followers + 1 };
        }
        true
    }

    pub fn media_posts(&self) -> Vec<Post> {
        self.posts_where(Post::has_media)
    }

    pub fn text_posts(&self) -> Vec<Post> {
        self.posts_where(|p| !p.has_media())
    }

    /// Posts for the active tab.
    pub fn tab_posts(&self) -> Vec<Post> {
        match self.tab {
            ProfileTab::Posts => self.media_posts(),
            ProfileTab::Threads => self.text_posts(),
        }
    }

    fn posts_where(&self, keep: impl Fn(&Post) -> bool) -> Vec<Post> {
        self.profile
            .as_ref()
            .map(|p| p.posts.iter().filter(|post| keep(post)).cloned().collect())
            .unwrap_or_default()
    }
}
