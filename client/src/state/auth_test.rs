use super::*;

fn user(full_name: Option<&str>, name: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: name.map(ToOwned::to_owned),
        full_name: full_name.map(ToOwned::to_owned),
        s3_bucket_prefix: None,
        pinecone_namespace: None,
        is_active: None,
        created_at: None,
    }
}

#[test]
fn default_state_is_signed_out_and_idle() {
    let state = AuthState::default();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn bootstrapping_state_is_loading() {
    let state = AuthState::bootstrapping();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn authenticated_requires_token_and_user() {
    let token_only = AuthState { token: Some("t".to_owned()), ..AuthState::default() };
    assert!(!token_only.is_authenticated());

    let user_only = AuthState { user: Some(user(None, None)), ..AuthState::default() };
    assert!(!user_only.is_authenticated());

    let both = AuthState { user: Some(user(None, None)), token: Some("t".to_owned()), loading: false };
    assert!(both.is_authenticated());
}

#[test]
fn greeting_prefers_full_name_then_name_then_email() {
    let mut state = AuthState { user: Some(user(Some("Ada Lovelace"), Some("ada"))), ..AuthState::default() };
    assert_eq!(state.greeting_name(), Some("Ada Lovelace"));

    state.user = Some(user(None, Some("ada")));
    assert_eq!(state.greeting_name(), Some("ada"));

    state.user = Some(user(None, None));
    assert_eq!(state.greeting_name(), Some("ada@example.com"));

    state.user = None;
    assert_eq!(state.greeting_name(), None);
}
