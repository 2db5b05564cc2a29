use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: Some("Ada".to_owned()),
        full_name: None,
        s3_bucket_prefix: None,
        pinecone_namespace: None,
        is_active: Some(true),
        created_at: None,
    }
}

#[test]
fn guard_waits_while_session_is_loading() {
    let state = AuthState { user: None, token: Some("t".to_owned()), loading: true };
    assert_eq!(guard_decision(&state, "/dashboard"), GuardDecision::Pending);
}

#[test]
fn guard_allows_authenticated_user() {
    let state = AuthState { user: Some(user()), token: Some("t".to_owned()), loading: false };
    assert_eq!(guard_decision(&state, "/dashboard"), GuardDecision::Allow);
}

#[test]
fn guard_redirects_with_requested_path() {
    let state = AuthState::default();
    assert_eq!(
        guard_decision(&state, "/dashboard"),
        GuardDecision::Redirect("/login?redirect=%2Fdashboard".to_owned())
    );
}

#[test]
fn guard_redirects_when_user_present_without_token() {
    let state = AuthState { user: Some(user()), token: None, loading: false };
    assert!(matches!(guard_decision(&state, "/dashboard"), GuardDecision::Redirect(_)));
}

#[test]
fn redirect_round_trips_through_login_query() {
    let path = login_redirect_path("/dashboard?tab=files&x=a b");
    let query = path.split_once('?').map(|(_, q)| q);
    assert_eq!(post_login_destination(query), "/dashboard?tab=files&x=a b");
}

#[test]
fn destination_accepts_leading_question_mark() {
    assert_eq!(post_login_destination(Some("?redirect=%2Fdashboard")), "/dashboard");
}

#[test]
fn destination_defaults_to_root() {
    assert_eq!(post_login_destination(None), "/");
    assert_eq!(post_login_destination(Some("")), "/");
    assert_eq!(post_login_destination(Some("other=1")), "/");
    assert_eq!(post_login_destination(Some("redirect=")), "/");
}

#[test]
fn destination_rejects_off_site_targets() {
    assert_eq!(post_login_destination(Some("redirect=https%3A%2F%2Fevil.test")), "/");
    assert_eq!(post_login_destination(Some("redirect=%2F%2Fevil.test")), "/");
    assert_eq!(post_login_destination(Some("redirect=%2F%5Cevil.test")), "/");
}
