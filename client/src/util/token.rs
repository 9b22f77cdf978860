//! Bearer-token decoding and user-id claim extraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API issues JWTs and never exposes a "who am I" endpoint, so the client
//! reads the user identity straight out of the token payload. The signature is
//! not verified here; the server does that on every request.
//!
//! CLAIMS
//! ======
//! `userId` is the canonical claim. Older tokens carry the identifier as `id`
//! or as `user.id`; those shapes are still accepted but logged so they can be
//! retired once the issuer is consistent.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

/// Error returned by [`decode_user_id`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The token does not have the `header.payload.signature` shape.
    #[error("token must have three dot-separated segments, found {0}")]
    Malformed(usize),
    /// The payload segment is not valid base64url.
    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload segment is not a JSON object.
    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// None of the supported user-id claims is present.
    #[error("token carries no user id claim")]
    MissingUserId,
}

/// Which claim the user id was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimSource {
    UserId,
    Id,
    NestedUserId,
}

impl ClaimSource {
    /// Whether the claim is a legacy shape kept only for older tokens.
    pub fn is_legacy(self) -> bool {
        self != Self::UserId
    }
}

/// Identity read from a decoded token payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenIdentity {
    pub user_id: String,
    pub source: ClaimSource,
}

/// Decode the JSON payload segment of a JWT without verifying the signature.
///
/// # Errors
///
/// Returns [`TokenError`] if the token is not three segments, the payload is
/// not base64url, or the payload is not a JSON object.
pub fn decode_payload(token: &str) -> Result<serde_json::Map<String, Value>, TokenError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Malformed(segments.len()));
    }
    // Some issuers pad the payload even though JWT forbids it.
    let raw = URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
    let payload: serde_json::Map<String, Value> = serde_json::from_slice(&raw)?;
    Ok(payload)
}

/// Extract the user id from a payload, probing `userId`, then `id`, then
/// `user.id`. The first non-null claim wins.
pub fn user_id_from_claims(claims: &serde_json::Map<String, Value>) -> Option<TokenIdentity> {
    let nested = claims.get("user").and_then(|user| user.get("id"));
    [
        (claims.get("userId"), ClaimSource::UserId),
        (claims.get("id"), ClaimSource::Id),
        (nested, ClaimSource::NestedUserId),
    ]
    .into_iter()
    .find_map(|(value, source)| {
        claim_as_string(value?).map(|user_id| TokenIdentity { user_id, source })
    })
}

/// Decode `token` and return the user identity it carries.
///
/// # Errors
///
/// Returns [`TokenError`] if the payload cannot be decoded or carries no
/// supported user-id claim.
pub fn decode_user_id(token: &str) -> Result<TokenIdentity, TokenError> {
    let claims = decode_payload(token)?;
    let identity = user_id_from_claims(&claims).ok_or(TokenError::MissingUserId)?;
    if identity.source.is_legacy() {
        leptos::logging::warn!("token user id read from legacy claim {:?}", identity.source);
    }
    Ok(identity)
}

// Ids are strings or integers depending on the issuer.
fn claim_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
