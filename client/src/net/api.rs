//! Typed adapter for the remote shop API.
//!
//! Every call takes a path, method and optional body, and attaches the bearer
//! token read from storage at call time (never cached). A 2xx response is
//! decoded into the endpoint's type; anything else becomes an [`ApiError`].
//!
//! ERROR HANDLING
//! ==============
//! No call is retried. Callers own the conversion into user-facing notices.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::{ApiRequest, BrowserTransport, RawResponse, Transport};
use super::types::{
    Credentials, Purchase, PurchaseRequest, Registration, RestockResult, SearchQuery, Sweet, SweetDraft,
    TokenResponse, User,
};
use crate::state::storage::{BrowserTokens, TokenStore};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const SWEETS_ENDPOINT: &str = "/api/sweets/";
pub const SEARCH_ENDPOINT: &str = "/api/sweets/search";
pub const CATEGORIES_ENDPOINT: &str = "/api/sweets/categories/list";
pub const PURCHASE_ENDPOINT: &str = "/api/inventory/purchase";
pub const MY_PURCHASES_ENDPOINT: &str = "/api/inventory/purchases/my";

fn sweet_endpoint(id: i64) -> String {
    format!("/api/sweets/{id}")
}

fn restock_endpoint(id: i64) -> String {
    format!("/api/inventory/restock/{id}")
}

/// The adapter as wired in the browser.
pub type ShopApi = ApiClient<BrowserTransport, BrowserTokens>;

/// Build the browser adapter against the configured API base.
pub fn browser_api() -> ShopApi {
    ApiClient::new(BrowserTransport, BrowserTokens, crate::config::api_base())
}

/// HTTP adapter bound to a transport and a token store.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    tokens: S,
    base: String,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(transport: T, tokens: S, base: &str) -> Self {
        Self { transport, tokens, base: base.to_owned() }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Dispatch a request and fail on any non-2xx status.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] when the call cannot complete,
    /// [`ApiError::Status`] when the server rejects it.
    pub async fn execute(&self, mut request: ApiRequest) -> Result<RawResponse, ApiError> {
        request.path = format!("{}{}", self.base, request.path);
        let request = request.bearer(self.tokens.load());
        let resp = self.transport.send(request).await?;
        if resp.is_success() {
            Ok(resp)
        } else {
            Err(ApiError::from_status(resp.status, &resp.body))
        }
    }

    /// Dispatch and decode the JSON body.
    ///
    /// # Errors
    ///
    /// As [`Self::execute`], plus [`ApiError::Decode`] for a malformed body.
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let resp = self.execute(request).await?;
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ---- auth ----

    /// Exchange credentials for a bearer token (`POST /api/auth/login`).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; a 401 means the credentials were rejected.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let request = ApiRequest::post(LOGIN_ENDPOINT)
            .form(&[("username", credentials.email.as_str()), ("password", credentials.password.as_str())]);
        self.fetch(request).await
    }

    /// Create an account (`POST /api/auth/register`).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; a 400 usually means the email is taken.
    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        self.fetch(ApiRequest::post(REGISTER_ENDPOINT).json(registration)?).await
    }

    /// Identity behind the stored token (`GET /api/auth/me`).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; a 401 means the token is missing or stale.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(ApiRequest::get(ME_ENDPOINT)).await
    }

    // ---- catalog ----

    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn list_sweets(&self) -> Result<Vec<Sweet>, ApiError> {
        self.fetch(ApiRequest::get(SWEETS_ENDPOINT)).await
    }

    /// # Errors
    ///
    /// Any [`ApiError`]; 404 for an unknown id.
    pub async fn get_sweet(&self, id: i64) -> Result<Sweet, ApiError> {
        self.fetch(ApiRequest::get(sweet_endpoint(id))).await
    }

    /// Search the catalog; empty filters are left off the query string.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn search_sweets(&self, query: &SearchQuery) -> Result<Vec<Sweet>, ApiError> {
        let request = query
            .query_pairs()
            .into_iter()
            .fold(ApiRequest::get(SEARCH_ENDPOINT), |req, (key, value)| req.query(key, value));
        self.fetch(request).await
    }

    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.fetch(ApiRequest::get(CATEGORIES_ENDPOINT)).await
    }

    /// Admin only.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; 403 for non-admin sessions.
    pub async fn create_sweet(&self, draft: &SweetDraft) -> Result<Sweet, ApiError> {
        self.fetch(ApiRequest::post(SWEETS_ENDPOINT).json(draft)?).await
    }

    /// Admin only.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; 403 for non-admin sessions, 404 for an unknown id.
    pub async fn update_sweet(&self, id: i64, draft: &SweetDraft) -> Result<Sweet, ApiError> {
        self.fetch(ApiRequest::put(sweet_endpoint(id)).json(draft)?).await
    }

    /// Admin only. The API answers 204 with an empty body.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; 403 for non-admin sessions, 404 for an unknown id.
    pub async fn delete_sweet(&self, id: i64) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(sweet_endpoint(id))).await.map(|_| ())
    }

    // ---- inventory ----

    /// # Errors
    ///
    /// Any [`ApiError`]; 400 carries the stock shortfall in its detail.
    pub async fn purchase(&self, sweet_id: i64, quantity: u32) -> Result<Purchase, ApiError> {
        let body = PurchaseRequest { sweet_id, quantity };
        self.fetch(ApiRequest::post(PURCHASE_ENDPOINT).json(&body)?).await
    }

    /// Admin only.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn restock(&self, sweet_id: i64, quantity: u32) -> Result<RestockResult, ApiError> {
        self.fetch(ApiRequest::post(restock_endpoint(sweet_id)).query("quantity", quantity))
            .await
    }

    /// Purchase history of the signed-in user.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; 401 without a valid token.
    pub async fn my_purchases(&self) -> Result<Vec<Purchase>, ApiError> {
        self.fetch(ApiRequest::get(MY_PURCHASES_ENDPOINT)).await
    }
}
