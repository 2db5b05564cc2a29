use super::*;
use crate::net::types::WaitlistResponse;

fn reply(ok: bool, success: bool, message: Option<&str>) -> Result<WaitlistReply, ApiError> {
    Ok(WaitlistReply { ok, body: WaitlistResponse { success, message: message.map(ToOwned::to_owned) } })
}

fn pending(email: &str) -> WaitlistState {
    let mut state = WaitlistState { email: email.to_owned(), ..WaitlistState::default() };
    assert!(state.begin().is_some());
    state
}

#[test]
fn blank_email_errors_without_request() {
    let mut state = WaitlistState { email: "   ".to_owned(), ..WaitlistState::default() };
    assert_eq!(state.begin(), None);
    assert_eq!(state.status, WaitlistStatus::Error);
    assert_eq!(state.message, EMPTY_EMAIL);
}

#[test]
fn begin_trims_and_enters_loading() {
    let mut state = WaitlistState {
        email: " ada@example.com ".to_owned(),
        status: WaitlistStatus::Error,
        message: "old".to_owned(),
    };
    assert_eq!(state.begin().as_deref(), Some("ada@example.com"));
    assert_eq!(state.status, WaitlistStatus::Loading);
    assert!(state.message.is_empty());
    assert!(state.locked());
    assert_eq!(state.button_label(), "Joining...");
}

#[test]
fn success_uses_server_message_and_clears_email() {
    let mut state = pending("ada@example.com");
    state.finish(reply(true, true, Some("You're on the list")));
    assert_eq!(state.status, WaitlistStatus::Success);
    assert_eq!(state.message, "You're on the list");
    assert!(state.email.is_empty());
    assert!(state.locked());
}

#[test]
fn success_without_message_uses_fallback() {
    let mut state = pending("ada@example.com");
    state.finish(reply(true, true, None));
    assert_eq!(state.message, JOINED);
}

#[test]
fn rejection_keeps_email_and_shows_server_message() {
    let mut state = pending("ada@");
    state.finish(reply(false, false, Some("Invalid email address format")));
    assert_eq!(state.status, WaitlistStatus::Error);
    assert_eq!(state.message, "Invalid email address format");
    assert_eq!(state.email, "ada@");
    assert!(!state.locked());
}

#[test]
fn ok_status_without_success_flag_is_an_error() {
    let mut state = pending("ada@example.com");
    state.finish(reply(true, false, None));
    assert_eq!(state.status, WaitlistStatus::Error);
    assert_eq!(state.message, JOIN_FAILED);
}

#[test]
fn transport_failure_shows_network_message() {
    let mut state = pending("ada@example.com");
    state.finish(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.status, WaitlistStatus::Error);
    assert_eq!(state.message, NETWORK_FAILED);
    assert_eq!(state.button_label(), "Join Waitlist");
}
