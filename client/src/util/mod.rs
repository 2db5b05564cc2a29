pub mod auth;
pub mod code_copy;
pub mod format;
pub mod sanitize;
pub mod token_storage;
