//! Build-time client configuration.
//!
//! The API base URL is baked in at compile time from `AGORA_API_BASE` since
//! the WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "https://social-media-mini-platform-backend.onrender.com";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Quiet period before a search query is sent.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Base URL of the REST API without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("AGORA_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}

/// Absolute URL for an API path such as `/api/posts`.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}
