//! Failure taxonomy for calls against the remote API.
//!
//! ERROR HANDLING
//! ==============
//! Every adapter call resolves to `Result<_, ApiError>`. Pages convert the
//! error into a transient notice via [`ApiError::user_message`]; nothing is
//! retried and nothing propagates past the page boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Shown when the server gave no usable detail.
pub const GENERIC_DETAIL: &str = "Something went wrong";

/// Shown for transport failures (DNS, refused connection, timeout).
pub const TRANSPORT_NOTICE: &str = "Network error. Check your connection and try again.";

/// Errors produced by the HTTP adapter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("network request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("request rejected ({status}): {detail}")]
    Status { status: u16, detail: String },

    /// A 2xx body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request payload could not be serialized.
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error, pulling the detail out of the response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body).unwrap_or_else(|| GENERIC_DETAIL.to_owned());
        Self::Status { status, detail }
    }

    /// HTTP status for rejected requests.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for a user-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => TRANSPORT_NOTICE.to_owned(),
            Self::Status { detail, .. } => detail.clone(),
            Self::Decode(_) | Self::Encode(_) => GENERIC_DETAIL.to_owned(),
        }
    }
}

/// Pull the human-readable error out of a JSON error body.
///
/// Accepts `{"detail": "..."}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}`; anything else yields `None`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}

/// Login or registration failure.
///
/// Wraps the adapter error so pages can tell auth failures apart from
/// catalog failures while still showing the server's detail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("authentication failed: {0}")]
pub struct AuthError(#[from] pub ApiError);

impl AuthError {
    pub fn user_message(&self) -> String {
        self.0.user_message()
    }
}
