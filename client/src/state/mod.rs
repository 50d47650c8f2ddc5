//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `notice`) so individual
//! components can depend on small focused models. `storage` holds the
//! durable token slot the session store writes through.

pub mod auth;
pub mod catalog;
pub mod notice;
pub mod storage;
