//! Networking modules for the remote shop API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the request/response boundary and the browser transport,
//! `api` wraps each endpoint with typed inputs and outputs, `error` holds the
//! failure taxonomy, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod http;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
