//! `POST /api/waitlist` handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use fillflow_site::net::types::WaitlistResponse;

use crate::services::waitlist::{self, WaitlistError};
use crate::state::AppState;

pub const JOINED_MESSAGE: &str = "Successfully added to waitlist!";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

fn reply(status: StatusCode, success: bool, message: &str) -> (StatusCode, Json<WaitlistResponse>) {
    (status, Json(WaitlistResponse { success, message: Some(message.to_owned()) }))
}

fn waitlist_error_reply(err: &WaitlistError) -> (StatusCode, Json<WaitlistResponse>) {
    if err.is_client_error() {
        reply(StatusCode::BAD_REQUEST, false, &err.to_string())
    } else {
        tracing::error!(error = %err, "waitlist signup failed");
        reply(StatusCode::INTERNAL_SERVER_ERROR, false, INTERNAL_ERROR_MESSAGE)
    }
}

/// Validate the body, store the normalized email, and report the outcome as
/// `{success, message}`. The body is read raw so malformed JSON gets the same
/// response shape as every other failure.
pub async fn join(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<WaitlistResponse>) {
    let email = match waitlist::parse_signup(&body) {
        Ok(email) => email,
        Err(e) => return waitlist_error_reply(&e),
    };
    match waitlist::subscribe(state.waitlist.as_ref(), email, &state.config.waitlist_source).await {
        Ok(_) => reply(StatusCode::OK, true, JOINED_MESSAGE),
        Err(e) => waitlist_error_reply(&e),
    }
}

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod tests;
