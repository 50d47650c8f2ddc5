//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read process env at runtime, so the API origin
//! is baked in from `STOREFRONT_API_BASE` when the crate is built. An empty
//! base keeps requests same-origin, which is how the SSR host proxies `/api`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// How long a transient notice stays on screen.
pub const NOTICE_TTL_MS: u64 = 4_000;

/// Base URL prepended to every API path.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("STOREFRONT_API_BASE").unwrap_or(""))
}

fn normalize_base(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}
