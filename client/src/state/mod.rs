pub mod auth;
pub mod blog;
pub mod forms;
pub mod session;
pub mod waitlist;
