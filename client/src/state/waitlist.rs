//! Waitlist form state: email input, submission status, and feedback message.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Coming Soon page posts to the configured waitlist endpoint through
//! `net::api::submit_waitlist`; this module turns the outcome into the message
//! shown under the form.

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

use crate::net::api::{ApiError, WaitlistReply};

pub const EMPTY_EMAIL: &str = "Please enter your email address";
pub const JOINED: &str = "Successfully added to waitlist!";
pub const JOIN_FAILED: &str = "Failed to join waitlist. Please try again.";
pub const NETWORK_FAILED: &str = "Network error. Please check your connection and try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaitlistStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistState {
    pub email: String,
    pub status: WaitlistStatus,
    pub message: String,
}

impl WaitlistState {
    /// Start a submission; returns the email to send, or `None` when blank.
    pub fn begin(&mut self) -> Option<String> {
        let email = self.email.trim();
        if email.is_empty() {
            self.status = WaitlistStatus::Error;
            self.message = EMPTY_EMAIL.to_owned();
            return None;
        }
        let email = email.to_owned();
        self.status = WaitlistStatus::Loading;
        self.message.clear();
        Some(email)
    }

    /// Apply the endpoint's answer to a submission started with [`Self::begin`].
    pub fn finish(&mut self, outcome: Result<WaitlistReply, ApiError>) {
        match outcome {
            Ok(reply) if reply.ok && reply.body.success => {
                self.status = WaitlistStatus::Success;
                self.message = message_or(reply.body.message, JOINED);
                self.email.clear();
            }
            Ok(reply) => {
                self.status = WaitlistStatus::Error;
                self.message = message_or(reply.body.message, JOIN_FAILED);
            }
            Err(e) => {
                log::error!("waitlist submission error: {e}");
                self.status = WaitlistStatus::Error;
                self.message = NETWORK_FAILED.to_owned();
            }
        }
    }

    /// Input and button are locked while sending and after success.
    pub fn locked(&self) -> bool {
        matches!(self.status, WaitlistStatus::Loading | WaitlistStatus::Success)
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            WaitlistStatus::Loading => "Joining...",
            WaitlistStatus::Success => "\u{2713} Joined",
            WaitlistStatus::Idle | WaitlistStatus::Error => "Join Waitlist",
        }
    }
}

fn message_or(message: Option<String>, fallback: &str) -> String {
    message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.to_owned())
}
