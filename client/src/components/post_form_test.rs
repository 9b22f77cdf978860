use super::*;

#[test]
fn validate_post_requires_user() {
    assert_eq!(validate_post(None, "hello", false), Err("User not authenticated"));
}

#[test]
fn validate_post_rejects_empty_post() {
    assert_eq!(validate_post(Some("u1"), "   ", false), Err("Post cannot be empty"));
}

#[test]
fn validate_post_accepts_text_or_image() {
    assert_eq!(validate_post(Some("u1"), "hello", false), Ok(()));
    assert_eq!(validate_post(Some("u1"), "", true), Ok(()));
}

#[test]
fn upload_note_only_for_failures() {
    assert_eq!(upload_note(&Ok(())), None);
    let note = upload_note(&Err(ApiError::Status { status: 500, message: None })).unwrap();
    assert!(note.contains("refreshing feed anyway"));
}
