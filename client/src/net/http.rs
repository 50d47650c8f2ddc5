//! Request/response boundary between the adapter and the network.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the browser transport answers with a transport error,
//! since these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! The adapter builds plain [`ApiRequest`] values and hands them to a
//! [`Transport`]. Keeping the wire step behind a trait lets the session and
//! catalog logic run against a scripted transport in native tests.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;

use super::error::ApiError;

/// HTTP verbs used by the shop API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Request payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// `application/json`.
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

/// A single call against the remote API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path, prefixed with the API base once the adapter dispatches it.
    pub path: String,
    /// Query pairs in insertion order.
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    /// Bearer token, read from storage at dispatch time.
    pub bearer: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: RequestBody::Empty, bearer: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query pair.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Set a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Set a form-encoded body.
    #[must_use]
    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        );
        self
    }

    #[must_use]
    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }
}

/// Status and raw body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and reports what came back.
///
/// Implementations must not retry: every call is at-most-once.
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the network call cannot complete.
    /// Non-2xx statuses are *not* errors at this layer.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send_with_fetch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_with_fetch(request: ApiRequest) -> Result<RawResponse, ApiError> {
    use gloo_net::http::Request;

    let transport_err = |e: gloo_net::Error| ApiError::Transport(e.to_string());

    let mut builder = match request.method {
        Method::Get => Request::get(&request.path),
        Method::Post => Request::post(&request.path),
        Method::Put => Request::put(&request.path),
        Method::Delete => Request::delete(&request.path),
    };
    if !request.query.is_empty() {
        builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    if let Some(token) = request.bearer.as_deref() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let prepared = match &request.body {
        RequestBody::Empty => builder.build().map_err(transport_err)?,
        RequestBody::Json(value) => builder.json(value).map_err(transport_err)?,
        RequestBody::Form(fields) => {
            let params = web_sys::UrlSearchParams::new()
                .map_err(|_| ApiError::Transport("could not build form body".to_owned()))?;
            for (key, value) in fields {
                params.append(key, value);
            }
            builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(params)
                .map_err(transport_err)?
        }
    };

    let resp = prepared.send().await.map_err(transport_err)?;
    let status = resp.status();
    let body = resp.text().await.map_err(transport_err)?;
    Ok(RawResponse { status, body })
}
