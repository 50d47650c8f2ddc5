//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep decision logic (route access, form validation) out of
//! page and component code so it can be tested without a browser.

pub mod auth;
pub mod forms;
