//! Route-level page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page is mounted by the router in `app.rs`. Pages behind an access
//! policy wrap their body in `ProtectedRoute` so the guard runs first.

pub mod admin;
pub mod home;
pub mod login;
pub mod purchases;
pub mod register;
pub mod sweets;
