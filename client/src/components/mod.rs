//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and shared page pieces, reading the auth
//! signal from Leptos context where the view depends on the session.

pub mod layout;
pub mod lead_form;
pub mod legal_document;
pub mod pricing_cards;
pub mod protected_route;
pub mod section;
pub mod waitlist_form;
