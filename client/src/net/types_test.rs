use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_parses_minimal_me_response() {
    let user: User = serde_json::from_str(r#"{"id":"u-1","email":"a@b.com"}"#).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.email, "a@b.com");
    assert!(user.name.is_none());
    assert!(user.s3_bucket_prefix.is_none());
    assert!(user.is_active.is_none());
}

#[test]
fn user_parses_full_me_response() {
    let raw = r#"{
        "id": "u-2",
        "email": "jo@example.com",
        "full_name": "Jo Doe",
        "s3_bucket_prefix": "users/u-2/",
        "pinecone_namespace": "ns-u-2",
        "is_active": true,
        "created_at": "2025-01-05T10:00:00Z"
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.full_name.as_deref(), Some("Jo Doe"));
    assert_eq!(user.pinecone_namespace.as_deref(), Some("ns-u-2"));
    assert_eq!(user.is_active, Some(true));
}

#[test]
fn display_name_prefers_full_name_then_name() {
    let mut user: User = serde_json::from_str(r#"{"id":"u","email":"e@x.io","name":"Jo"}"#).unwrap();
    assert_eq!(user.display_name(), Some("Jo"));
    user.full_name = Some("Jo Doe".to_owned());
    assert_eq!(user.display_name(), Some("Jo Doe"));
    user.full_name = Some("   ".to_owned());
    user.name = None;
    assert_eq!(user.display_name(), None);
}

// =============================================================
// Requests / errors
// =============================================================

#[test]
fn register_request_omits_missing_name() {
    let body = RegisterRequest { email: "a@b.com", password: "pw", name: None };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw" })
    );
}

#[test]
fn api_error_body_message_reads_string_detail() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"Incorrect email or password"}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("Incorrect email or password"));
}

#[test]
fn api_error_body_message_ignores_structured_detail() {
    let body: ApiErrorBody =
        serde_json::from_str(r#"{"detail":[{"loc":["body","email"],"msg":"invalid"}]}"#).unwrap();
    assert_eq!(body.message(), None);
    let empty: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.message(), None);
}

#[test]
fn waitlist_response_tolerates_missing_fields() {
    let body: WaitlistResponse = serde_json::from_str("{}").unwrap();
    assert!(!body.success);
    assert!(body.message.is_none());
}

// =============================================================
// Blog
// =============================================================

#[test]
fn blog_metadata_parses_index_with_optional_fields() {
    let raw = r#"{
        "posts": [
            {
                "id": "1",
                "title": "Autofill for HR",
                "slug": "autofill-for-hr",
                "audience": "executive",
                "content_type": "analysis",
                "date": "2025-03-01",
                "reading_time": "4 min read",
                "tags": ["hr"],
                "html_file": "autofill-for-hr.html"
            },
            {
                "id": "2",
                "title": "Field matching internals",
                "slug": "field-matching",
                "audience": "technical",
                "date": "2025-03-08",
                "reading_time": "9 min read"
            }
        ],
        "last_updated": "2025-03-08"
    }"#;
    let meta: BlogMetadata = serde_json::from_str(raw).unwrap();
    assert_eq!(meta.posts.len(), 2);
    assert_eq!(meta.posts[0].audience, Audience::Executive);
    assert_eq!(meta.posts[0].content_type, Some(ContentType::Analysis));
    assert_eq!(meta.posts[1].html_file, None);
    assert!(meta.posts[1].tags.is_empty());
    assert_eq!(meta.last_updated.as_deref(), Some("2025-03-08"));
}

#[test]
fn audience_rejects_unknown_values() {
    assert!(serde_json::from_str::<Audience>(r#""marketing""#).is_err());
}

#[test]
fn audience_label_is_capitalized() {
    assert_eq!(Audience::Executive.label(), "Executive");
    assert_eq!(Audience::Technical.label(), "Technical");
}
