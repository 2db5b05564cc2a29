use super::*;

fn user() -> User {
    User {
        id: "usr_42".to_owned(),
        email: "ada@example.com".to_owned(),
        name: None,
        full_name: Some("Ada Lovelace".to_owned()),
        s3_bucket_prefix: None,
        pinecone_namespace: None,
        is_active: Some(true),
        created_at: None,
    }
}

// =============================================================================
// welcome_heading
// =============================================================================

#[test]
fn welcome_uses_display_name() {
    let state = AuthState { user: Some(user()), token: Some("t".to_owned()), loading: false };
    assert_eq!(welcome_heading(&state), "Welcome back, Ada Lovelace!");
}

#[test]
fn welcome_without_name_omits_it() {
    let mut u = user();
    u.full_name = Some("   ".to_owned());
    let state = AuthState { user: Some(u), token: Some("t".to_owned()), loading: false };
    assert_eq!(welcome_heading(&state), "Welcome back!");
    assert_eq!(welcome_heading(&AuthState::default()), "Welcome back!");
}

// =============================================================================
// account_rows
// =============================================================================

#[test]
fn account_rows_skip_missing_storage_fields() {
    let rows = account_rows(&user());
    assert_eq!(rows, [("Email", "ada@example.com".to_owned()), ("User ID", "usr_42".to_owned())]);
}

#[test]
fn account_rows_include_storage_fields_when_set() {
    let mut u = user();
    u.s3_bucket_prefix = Some("users/usr_42/".to_owned());
    u.pinecone_namespace = Some("ns-42".to_owned());
    let labels: Vec<_> = account_rows(&u).into_iter().map(|(label, _)| label).collect();
    assert_eq!(labels, ["Email", "User ID", "S3 Prefix", "Pinecone Namespace"]);
}
