//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shop chrome and catalog cards while reading the session
//! and notice state from Leptos context providers.

pub mod field_hint;
pub mod navbar;
pub mod notice_tray;
pub mod protected_route;
pub mod sweet_card;
