//! Networking modules for the auth API, waitlist, and static blog content.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles auth + waitlist REST calls, `blog` loads static content, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod blog;
pub mod types;
