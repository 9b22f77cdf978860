//! API failure taxonomy and the single user-facing presentation for it.
//!
//! ERROR HANDLING
//! ==============
//! Views never format transport errors themselves. They hold an `ApiError`
//! and render `user_message(fallback)` through `ErrorBanner`, passing the
//! generic retry text for their context.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const MISSING_TOKEN_MESSAGE: &str = "User not authenticated. Please log in.";

/// Error returned by every helper in `net::api`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No bearer token was available; the request was never sent.
    #[error("missing bearer token")]
    MissingToken,
    /// The request could not be sent or the response body could not be read.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The call is only meaningful in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text to show the user. Server-provided error text is preferred when
    /// present; otherwise `fallback` is used.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::MissingToken => MISSING_TOKEN_MESSAGE.to_owned(),
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// Build a status error from a response body of the form `{"error": "..."}`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned));
        Self::Status { status, message }
    }
}
