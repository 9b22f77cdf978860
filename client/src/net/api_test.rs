use futures::executor::block_on;

use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(POSTS_ENDPOINT, "/api/posts");
    assert_eq!(CREATE_POST_ENDPOINT, "/api/posts/create");
    assert_eq!(likes_endpoint("p9"), "/api/likes/p9");
    assert_eq!(comments_endpoint("p9"), "/api/comments/p9");
    assert_eq!(CREATE_COMMENT_ENDPOINT, "/api/comments/create");
    assert_eq!(user_profile_endpoint("u123"), "/api/users/u123/profile");
    assert_eq!(FOLLOW_CHECK_ENDPOINT, "/api/follows/check");
    assert_eq!(USER_SEARCH_ENDPOINT, "/api/users/search");
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
    assert_eq!(REGISTER_ENDPOINT, "/api/auth/register");
}

#[test]
fn follow_endpoint_picks_direction() {
    assert_eq!(follow_endpoint(true), "/api/follows/follow");
    assert_eq!(follow_endpoint(false), "/api/follows/unfollow");
}

#[test]
fn bearer_header_prefixes_scheme() {
    assert_eq!(bearer_header("abc.def.ghi"), "Bearer abc.def.ghi");
}

// =============================================================
// Missing token short-circuit
// =============================================================

#[test]
fn require_token_rejects_absent_and_empty() {
    assert_eq!(require_token(None), Err(ApiError::MissingToken));
    assert_eq!(require_token(Some("")), Err(ApiError::MissingToken));
    assert_eq!(require_token(Some("t")), Ok("t"));
}

#[test]
fn protected_calls_fail_with_missing_token() {
    assert_eq!(block_on(fetch_posts(None)), Err(ApiError::MissingToken));
    assert_eq!(block_on(fetch_likes(None, "p1")).unwrap_err(), ApiError::MissingToken);
    assert_eq!(block_on(toggle_like(None, "p1")), Err(ApiError::MissingToken));
    assert_eq!(block_on(create_comment(None, "p1", "hi")), Err(ApiError::MissingToken));
    assert_eq!(block_on(fetch_user_profile(None, "u1")).unwrap_err(), ApiError::MissingToken);
    assert_eq!(block_on(check_following(None, "u1", "u2")), Err(ApiError::MissingToken));
    assert_eq!(block_on(set_following(None, "u1", "u2", true)), Err(ApiError::MissingToken));
    assert_eq!(block_on(search_users(None, "al")), Err(ApiError::MissingToken));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    assert_eq!(block_on(fetch_posts(Some("t"))), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_comments("p1")), Err(ApiError::Unavailable));
    assert_eq!(block_on(login("a@b.c", "pw")), Err(ApiError::Unavailable));
}
