use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

// =============================================================
// decode_payload
// =============================================================

#[test]
fn decode_payload_reads_claims() {
    let token = make_token(&serde_json::json!({ "userId": "u-1", "exp": 10 }));
    let claims = decode_payload(&token).unwrap();
    assert_eq!(claims.get("userId"), Some(&serde_json::json!("u-1")));
    assert_eq!(claims.get("exp"), Some(&serde_json::json!(10)));
}

#[test]
fn decode_payload_rejects_wrong_segment_count() {
    assert!(matches!(decode_payload("abc"), Err(TokenError::Malformed(1))));
    assert!(matches!(decode_payload("a.b"), Err(TokenError::Malformed(2))));
    assert!(matches!(decode_payload("a.b.c.d"), Err(TokenError::Malformed(4))));
}

#[test]
fn decode_payload_rejects_bad_base64() {
    assert!(matches!(decode_payload("a.!!!.c"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_payload_rejects_non_json() {
    let body = URL_SAFE_NO_PAD.encode("not json");
    let token = format!("h.{body}.s");
    assert!(matches!(decode_payload(&token), Err(TokenError::Json(_))));
}

#[test]
fn decode_payload_tolerates_padding() {
    let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"id":"7"}"#);
    let token = format!("h.{body}.s");
    assert!(decode_payload(&token).is_ok());
}

// =============================================================
// Claim priority
// =============================================================

#[test]
fn user_id_claim_wins_over_id_and_nested() {
    let token = make_token(&serde_json::json!({
        "userId": "canonical",
        "id": "legacy",
        "user": { "id": "nested" }
    }));
    let identity = decode_user_id(&token).unwrap();
    assert_eq!(identity.user_id, "canonical");
    assert_eq!(identity.source, ClaimSource::UserId);
}

#[test]
fn id_claim_wins_over_nested() {
    let token = make_token(&serde_json::json!({ "id": "legacy", "user": { "id": "nested" } }));
    let identity = decode_user_id(&token).unwrap();
    assert_eq!(identity.user_id, "legacy");
    assert_eq!(identity.source, ClaimSource::Id);
}

#[test]
fn nested_user_id_is_last_resort() {
    let token = make_token(&serde_json::json!({ "user": { "id": "nested" } }));
    let identity = decode_user_id(&token).unwrap();
    assert_eq!(identity.user_id, "nested");
    assert_eq!(identity.source, ClaimSource::NestedUserId);
}

#[test]
fn null_claim_falls_through_to_next() {
    let token = make_token(&serde_json::json!({ "userId": null, "id": "legacy" }));
    assert_eq!(decode_user_id(&token).unwrap().user_id, "legacy");
}

#[test]
fn numeric_user_id_is_stringified() {
    let token = make_token(&serde_json::json!({ "userId": 42 }));
    assert_eq!(decode_user_id(&token).unwrap().user_id, "42");
}

#[test]
fn missing_claims_is_an_error() {
    let token = make_token(&serde_json::json!({ "sub": "someone" }));
    assert!(matches!(decode_user_id(&token), Err(TokenError::MissingUserId)));
}

#[test]
fn only_canonical_claim_is_not_legacy() {
    assert!(!ClaimSource::UserId.is_legacy());
    assert!(ClaimSource::Id.is_legacy());
    assert!(ClaimSource::NestedUserId.is_legacy());
}
