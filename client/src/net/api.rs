//! REST API helpers for the social API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` and logs the failure once here,
//! so views only decide what to show. Protected helpers take the bearer token
//! as `Option<&str>` and fail with `ApiError::MissingToken` before touching
//! the network when it is absent.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Comment, LikesResponse, Post, UserProfile, UserSummary};
#[cfg(feature = "hydrate")]
use super::types::{
    CreateCommentRequest, FollowCheck, FollowRequest, LoginRequest, LoginResponse, RegisterRequest,
    SearchResponse,
};
#[cfg(feature = "hydrate")]
use crate::config::api_url;

#[cfg(any(test, feature = "hydrate"))]
const POSTS_ENDPOINT: &str = "/api/posts";
#[cfg(any(test, feature = "hydrate"))]
const CREATE_POST_ENDPOINT: &str = "/api/posts/create";
#[cfg(any(test, feature = "hydrate"))]
const CREATE_COMMENT_ENDPOINT: &str = "/api/comments/create";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_ENDPOINT: &str = "/api/auth/register";
#[cfg(any(test, feature = "hydrate"))]
const FOLLOW_CHECK_ENDPOINT: &str = "/api/follows/check";
#[cfg(any(test, feature = "hydrate"))]
const USER_SEARCH_ENDPOINT: &str = "/api/users/search";

#[cfg(any(test, feature = "hydrate"))]
fn likes_endpoint(post_id: &str) -> String {
    format!("/api/likes/{post_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comments_endpoint(post_id: &str) -> String {
    format!("/api/comments/{post_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_profile_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/profile")
}

#[cfg(any(test, feature = "hydrate"))]
fn follow_endpoint(follow: bool) -> &'static str {
    if follow { "/api/follows/follow" } else { "/api/follows/unfollow" }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fail fast when a protected call has no token.
fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    token.filter(|t| !t.is_empty()).ok_or(ApiError::MissingToken)
}

/// Log a failed call once at the API boundary.
fn logged<T>(what: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        match e {
            ApiError::MissingToken | ApiError::Unavailable => {}
            _ => leptos::logging::warn!("{what} failed: {e}"),
        }
    }
    result
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer_header};

    pub fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &bearer_header(token))
    }

    pub async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| ApiError::Network(e.to_string()))
    }

    pub async fn send_request(request: gloo_net::http::Request) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| ApiError::Network(e.to_string()))
    }

    pub async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }

    pub async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let resp = check(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn encode<T: serde::Serialize>(
        builder: RequestBuilder,
        body: &T,
    ) -> Result<gloo_net::http::Request, ApiError> {
        builder.json(body).map_err(|e| ApiError::Network(e.to_string()))
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result: Result<_, ApiError> = async {
            let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
            let request = http::encode(gloo_net::http::Request::post(&api_url(LOGIN_ENDPOINT)), &body)?;
            let resp = http::send_request(request).await?;
            let body: LoginResponse = http::json(resp).await?;
            Ok(body.token)
        }
        .await;
        logged("login", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        logged("login", Err(ApiError::Unavailable))
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the server rejects the signup.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result: Result<_, ApiError> = async {
            let body = RegisterRequest {
                username: username.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            };
            let request = http::encode(gloo_net::http::Request::post(&api_url(REGISTER_ENDPOINT)), &body)?;
            let resp = http::send_request(request).await?;
            http::check(resp).await.map(|_| ())
        }
        .await;
        logged("register", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        logged("register", Err(ApiError::Unavailable))
    }
}

// =============================================================================
// POSTS
// =============================================================================

/// Fetch the feed from `GET /api/posts`.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] without sending anything when `token`
/// is `None`, otherwise any transport or status failure.
pub async fn fetch_posts(token: Option<&str>) -> Result<Vec<Post>, ApiError> {
    let result: Result<_, ApiError> = async {
        let token = require_token(token)?;
        #[cfg(feature = "hydrate")]
        {
            let builder = http::authorized(gloo_net::http::Request::get(&api_url(POSTS_ENDPOINT)), token);
            let resp = http::send(builder).await?;
            http::json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
    .await;
    logged("fetch posts", result)
}

/// Create a post via multipart `POST /api/posts/create`.
///
/// Fields: `userId`, `content`, and `image` when a file is attached.
///
/// # Errors
///
/// Returns [`ApiError`] if the form cannot be built or the request fails.
#[cfg(feature = "hydrate")]
pub async fn create_post(
    token: Option<&str>,
    user_id: &str,
    content: &str,
    image: Option<web_sys::File>,
) -> Result<(), ApiError> {
    let result: Result<_, ApiError> = async {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data unavailable".to_owned()))?;
        let form_err = |_| ApiError::Network("failed to build form".to_owned());
        form.append_with_str("userId", user_id).map_err(form_err)?;
        form.append_with_str("content", content).map_err(form_err)?;
        if let Some(file) = image.as_ref() {
            form.append_with_blob_and_filename("image", file, &file.name())
                .map_err(form_err)?;
        }

        let mut builder = gloo_net::http::Request::post(&api_url(CREATE_POST_ENDPOINT));
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = http::authorized(builder, token);
        }
        let request = builder.body(form).map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = http::send_request(request).await?;
        http::check(resp).await.map(|_| ())
    }
    .await;
    logged("create post", result)
}

// =============================================================================
// LIKES
// =============================================================================

/// Fetch like count and the caller's like flag from `GET /api/likes/{post_id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on missing token or request failure.
pub async fn fetch_likes(token: Option<&str>, post_id: &str) -> Result<LikesResponse, ApiError> {
    let result: Result<_, ApiError> = async {
        let token = require_token(token)?;
        #[cfg(feature = "hydrate")]
        {
            let builder = http::authorized(gloo_net::http::Request::get(&api_url(&likes_endpoint(post_id))), token);
            let resp = http::send(builder).await?;
            http::json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, post_id);
            Err(ApiError::Unavailable)
        }
    }
    .await;
    logged("fetch likes", result)
}

/// Toggle the caller's like via `POST /api/likes/{post_id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on missing token or request failure.
pub async fn toggle_like(token: Option<&str>, post_id: &str) -> Result<(), ApiError> {
    let result: Result<_, ApiError> = async {
        let token = require_token(token)?;
        #[cfg(feature = "hydrate")]
        {
            let builder = http::authorized(gloo_net::http::Request::post(&api_url(&likes_endpoint(post_id))), token);
            let request = http::encode(builder, &serde_json::json!({}))?;
            let resp = http::send_request(request).await?;
            http::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, post_id);
            Err(ApiError::Unavailable)
        }
    }
    .await;
    logged("toggle like", result)
}

// =============================================================================
// COMMENTS
// =============================================================================

/// Fetch comments from `GET /api/comments/{post_id}`. Public endpoint.
///
/// # Errors
///
/// Returns [`ApiError`] on request failure.
pub async fn fetch_comments(post_id: &str) -> Result<Vec<Comment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result: Result<_, ApiError> = async {
            let resp = http::send(gloo_net::http::Request::get(&api_url(&comments_endpoint(post_id)))).await?;
            http::json(resp).await
        }
        .await;
        logged("fetch comments", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        logged("fetch comments", Err(ApiError::Unavailable))
    }
}

/// Add a comment via `POST /api/comments/create`.
///
/// # Errors
///
/// Returns [`ApiError`] on missing token or request failure.
pub async fn create_comment(token: Option<&str>, post_id: &str, text: &str) -> Result<(), ApiError> {
    let result: Result<_, ApiError> = async {
        let token = require_token(token)?;
        #[cfg(feature = "hydrate")]
        {
            let body = CreateCommentRequest { post_id: post_id.to_owned(), comment_text: text.to_owned() };
            let builder = http::authorized(gloo_net::http::Request::post(&api_url(CREATE_COMMENT_ENDPOINT)), token);
            let resp = http::send_request(http::encode(builder, &body)?).await?;
            http::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, post_id, text);
            Err(ApiError::Unavailable)
        }
    }
    .await;
    logged("create comment", result)
}

// =============================================================================
// USERS
// =============================================================================

/// Fetch a user's profile, stats, and posts from `/api/users/{user_id}/profile`.
///
/// # Errors
///
/// Returns [`ApiError`] on missing token or request failure.
pub async fn fetch_user_profile(token: Option<&str>, user_id: &str) -> Result<UserProfile, ApiError> {
    let result: Result<_, ApiError> = async {
        let token = require_token(token)?;
        #[cfg(feature = "hydrate")]
        {
            let url = api_url(&user_profile_endpoint(user_id));
            let resp = http::send(http::authorized(gloo_net::http::Request::get(&url), token)).await?;
            http::json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user_id);
            Err(ApiError::Unavailable)
        }
    }
    .await;
    logged("fetch profile", result)
}

/// Ask whether `follower_id` follows `following_id` via `GET /api/follows/check`.
///
/// # Errors
///
/// Returns [`ApiError`] on missing token or request failure.
pub async fn check_following(token: Option<&str>, follower_id: &str, following_id: &str) -> Result<bool, ApiError> {
    let result: Result<_, ApiError> = async {
        let token = require_token(token)?;
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::get(&api_url(FOLLOW_CHECK_ENDPOINT))
                .query([("followerId", follower_id), ("followingId", following_id)]);
            let resp = http::send(http::authorized(builder, token)).await?;
            let body: FollowCheck = http::json(resp).await?;
            Ok(body.is_following)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, follower_id, following_id);
            Err(ApiError::Unavailable)
        }
    }
    .await;
    logged("check follow", result)
}

/// Follow (`follow = true`) or unfollow a user.
///
/// # Errors
///
/// Returns [`ApiError`] on missing token or request failure.
pub async fn set_following(
    token: Option<&str>,
    follower_id: &str,
    following_id: &str,
    follow: bool,
) -> Result<(), ApiError> {
    let result: Result<_, ApiError> = async {
        let token = require_token(token)?;
        #[cfg(feature = "hydrate")]
        {
            let body = FollowRequest { follower_id: follower_id.to_owned(), following_id: following_id.to_owned() };
            let builder = http::authorized(gloo_net::http::Request::post(&api_url(follow_endpoint(follow))), token);
            let resp = http::send_request(http::encode(builder, &body)?).await?;
            http::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, follower_id, following_id, follow);
            Err(ApiError::Unavailable)
        }
    }
    .await;
    logged(if follow { "follow" } else { "unfollow" }, result)
}

/// Search users by name via `GET /api/users/search?q=`.
///
/// # Errors
///
/// Returns [`ApiError`] on missing token or request failure.
pub async fn search_users(token: Option<&str>, query: &str) -> Result<Vec<UserSummary>, ApiError> {
    let result: Result<_, ApiError> = async {
        let token = require_token(token)?;
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::get(&api_url(USER_SEARCH_ENDPOINT)).query([("q", query)]);
            let resp = http::send(http::authorized(builder, token)).await?;
            let body: SearchResponse = http::json(resp).await?;
            Ok(body.users)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, query);
            Err(ApiError::Unavailable)
        }
    }
    .await;
    logged("search users", result)
}
