use super::*;

// =============================================================
// Ids
// =============================================================

#[test]
fn post_accepts_numeric_and_string_ids() {
    let numeric: Post = serde_json::from_value(serde_json::json!({ "id": 12, "username": "al" })).unwrap();
    let text: Post = serde_json::from_value(serde_json::json!({ "id": "p-1", "username": "al" })).unwrap();
    assert_eq!(numeric.id, "12");
    assert_eq!(text.id, "p-1");
}

#[test]
fn post_rejects_non_scalar_id() {
    let result = serde_json::from_value::<Post>(serde_json::json!({ "id": [1], "username": "al" }));
    assert!(result.is_err());
}

#[test]
fn post_optional_fields_default() {
    let post: Post = serde_json::from_value(serde_json::json!({ "id": 1 })).unwrap();
    assert_eq!(post.username, "");
    assert_eq!(post.content, None);
    assert!(!post.has_media());
}

#[test]
fn post_with_empty_media_url_has_no_media() {
    let post: Post = serde_json::from_value(serde_json::json!({ "id": 1, "media_url": "" })).unwrap();
    assert!(!post.has_media());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn comment_request_uses_api_field_names() {
    let body = CreateCommentRequest { post_id: "7".to_owned(), comment_text: "hi".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "postId": "7", "commentText": "hi" })
    );
}

#[test]
fn follow_request_uses_api_field_names() {
    let body = FollowRequest { follower_id: "a".to_owned(), following_id: "b".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "followerId": "a", "followingId": "b" })
    );
}

// =============================================================
// Responses
// =============================================================

#[test]
fn likes_response_reads_current_user_flag() {
    let resp: LikesResponse = serde_json::from_value(serde_json::json!({
        "likes": [{ "user_id": 1 }, { "user_id": 2 }],
        "currentUserLiked": true
    }))
    .unwrap();
    assert_eq!(resp.likes.len(), 2);
    assert!(resp.current_user_liked);
}

#[test]
fn profile_stats_accept_string_counts() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "user": { "id": 3, "username": "cat", "email": "c@x.io" },
        "stats": { "postCount": "4", "followersCount": 10, "followingCount": null },
        "posts": []
    }))
    .unwrap();
    assert_eq!(profile.user.id, "3");
    assert_eq!(
        profile.stats,
        ProfileStats { post_count: 4, followers_count: 10, following_count: 0 }
    );
}

#[test]
fn profile_stats_reject_negative_counts() {
    let result = serde_json::from_value::<ProfileStats>(serde_json::json!({ "postCount": -1 }));
    assert!(result.is_err());
}

#[test]
fn search_response_defaults_to_empty() {
    let resp: SearchResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(resp.users.is_empty());
}
