use super::*;

const FALLBACK: &str = "Failed to fetch posts. Please try again.";

#[test]
fn missing_token_has_fixed_message() {
    assert_eq!(ApiError::MissingToken.user_message(FALLBACK), MISSING_TOKEN_MESSAGE);
}

#[test]
fn network_and_decode_errors_use_fallback() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(FALLBACK), FALLBACK);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(FALLBACK), FALLBACK);
    assert_eq!(ApiError::Unavailable.user_message(FALLBACK), FALLBACK);
}

#[test]
fn status_error_prefers_server_message() {
    let err = ApiError::from_status(401, r#"{"error":"Invalid credentials"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) }
    );
    assert_eq!(err.user_message(FALLBACK), "Invalid credentials");
}

#[test]
fn status_error_without_body_uses_fallback() {
    let err = ApiError::from_status(500, "<html>oops</html>");
    assert_eq!(err, ApiError::Status { status: 500, message: None });
    assert_eq!(err.user_message(FALLBACK), FALLBACK);
}

#[test]
fn blank_server_message_uses_fallback() {
    let err = ApiError::from_status(400, r#"{"error":"  "}"#);
    assert_eq!(err.user_message(FALLBACK), FALLBACK);
}

#[test]
fn display_includes_status() {
    assert_eq!(ApiError::from_status(404, "").to_string(), "request failed: 404");
}
