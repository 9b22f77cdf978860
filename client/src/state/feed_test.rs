use super::*;
use crate::net::error::MISSING_TOKEN_MESSAGE;

fn post(id: &str) -> Post {
    Post {
        id: id.to_owned(),
        username: "al".to_owned(),
        content: Some("hello".to_owned()),
        media_url: None,
        created_at: None,
    }
}

#[test]
fn default_is_loading_and_not_empty() {
    let state = FeedState::default();
    assert_eq!(state, FeedState::Loading);
    assert!(!state.is_empty());
    assert_eq!(state.error_message(), None);
}

#[test]
fn loaded_posts_are_exposed() {
    let state = FeedState::from_result(Ok(vec![post("1"), post("2")]));
    assert_eq!(state.posts().len(), 2);
    assert!(!state.is_empty());
}

#[test]
fn loaded_without_posts_is_empty() {
    assert!(FeedState::from_result(Ok(Vec::new())).is_empty());
}

#[test]
fn missing_token_shows_auth_message() {
    let state = FeedState::from_result(Err(ApiError::MissingToken));
    assert_eq!(state.error_message().as_deref(), Some(MISSING_TOKEN_MESSAGE));
    assert!(state.posts().is_empty());
}

#[test]
fn network_failure_shows_retry_message() {
    let state = FeedState::from_result(Err(ApiError::Network("reset".to_owned())));
    assert_eq!(state.error_message().as_deref(), Some(FEED_FAILED_MESSAGE));
}
