//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Static copy lives next to the page that shows it.

pub mod about;
pub mod blog;
pub mod blog_post;
pub mod coming_soon;
pub mod contact;
pub mod custom_solutions;
pub mod dashboard;
pub mod faq;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pricing;
pub mod privacy;
pub mod schedule_demo;
pub mod security;
pub mod terms;
