//! Same-origin forwarder for `/api/*`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client issues relative `/api/...` requests. This handler
//! replays each one against the configured remote shop API and streams the
//! reply back unchanged, so the client never needs CORS or to know the
//! upstream address.
//!
//! ERROR HANDLING
//! ==============
//! Upstream status codes pass through untouched; only failures to reach the
//! upstream are turned into a `{"detail": ...}` body the client already
//! knows how to display.

use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::config::ServerConfig;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Headers that describe one hop and must not be replayed.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The inbound body could not be read or was too large.
    #[error("request body rejected: {0}")]
    Body(String),

    /// The upstream did not answer in time.
    #[error("upstream timed out")]
    Timeout,

    /// The upstream could not be reached or its reply could not be read.
    #[error("upstream unavailable: {0}")]
    Upstream(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ProxyError {
    fn from_reqwest(e: &reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) | Self::ClientBuild(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        let status = self.status_code();
        (status, axum::Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}

/// Shared upstream client and base URL.
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { client, upstream: config.api_upstream.clone() })
    }
}

/// Join the upstream base with the inbound path and query.
pub fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    let base = upstream.trim_end_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}{path}?{q}"),
        None => format!("{base}{path}"),
    }
}

pub fn is_forwardable_header(name: &HeaderName) -> bool {
    !HOP_BY_HOP.contains(&name.as_str())
}

fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_forwardable_header(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Axum handler for `/api/{*rest}`.
///
/// # Errors
///
/// Returns [`ProxyError`] when the body cannot be read or the upstream is
/// unreachable. Upstream error statuses are not errors here.
pub async fn forward(State(proxy): State<ProxyState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(&proxy.upstream, parts.uri.path(), parts.uri.query());
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let reply = proxy
        .client
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(bytes)
        .send()
        .await
        .map_err(|e| ProxyError::from_reqwest(&e))?;

    let status = reply.status();
    let headers = forwardable_headers(reply.headers());
    let payload = reply.bytes().await.map_err(|e| ProxyError::from_reqwest(&e))?;
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
