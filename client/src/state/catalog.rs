//! Catalog list state and the purchase action.
//!
//! DESIGN
//! ======
//! Listing state is page-scoped: each page that shows sweets owns its own
//! `RwSignal<CatalogState>`. The purchase rules live here so the "must be
//! signed in" check runs before any request is built.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use super::auth::AuthState;
use super::notice::{NoticeState, notify_error};
use super::storage::TokenStore;
use crate::net::api::{ApiClient, ShopApi};
use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::types::{Purchase, SearchQuery, Sweet};

/// Notice shown when an anonymous user tries to buy.
pub const LOGIN_TO_PURCHASE: &str = "Please login to purchase";

/// Sweets shown by a listing page.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub items: Vec<Sweet>,
    pub categories: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a finished list request.
    pub fn finish_load(&mut self, result: Result<Vec<Sweet>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e.user_message()),
        }
    }
}

/// Why a purchase did not happen.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    #[error("Please login to purchase")]
    LoginRequired,
    #[error("{0} is out of stock")]
    OutOfStock(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Buy one unit of `sweet` for the current session.
///
/// Anonymous sessions and out-of-stock items are refused locally without
/// touching the network.
///
/// # Errors
///
/// Returns [`PurchaseError`] describing the refusal or the API failure.
pub async fn purchase_one<T: Transport, S: TokenStore>(
    api: &ApiClient<T, S>,
    auth: &AuthState,
    sweet: &Sweet,
) -> Result<Purchase, PurchaseError> {
    if !auth.is_signed_in() {
        return Err(PurchaseError::LoginRequired);
    }
    if !sweet.is_in_stock {
        return Err(PurchaseError::OutOfStock(sweet.name.clone()));
    }
    Ok(api.purchase(sweet.id, 1).await?)
}

/// Reload the full list into `catalog`.
pub fn load_catalog(api: ShopApi, catalog: RwSignal<CatalogState>, notices: RwSignal<NoticeState>) {
    catalog.update(CatalogState::begin_load);
    leptos::task::spawn_local(async move {
        let result = api.list_sweets().await;
        if let Err(e) = &result {
            notify_error(notices, "Error loading sweets", e);
        }
        let _ = catalog.try_update(|c| c.finish_load(result));
    });
}

/// Replace the list with search results. An empty query reloads everything.
pub fn search_catalog(
    api: ShopApi,
    query: SearchQuery,
    catalog: RwSignal<CatalogState>,
    notices: RwSignal<NoticeState>,
) {
    if query.is_empty() {
        load_catalog(api, catalog, notices);
        return;
    }
    catalog.update(CatalogState::begin_load);
    leptos::task::spawn_local(async move {
        let result = api.search_sweets(&query).await;
        if let Err(e) = &result {
            notify_error(notices, "Search failed", e);
        }
        let _ = catalog.try_update(|c| c.finish_load(result));
    });
}

/// Fill the category filter. Failures only cost the dropdown its options.
pub fn load_categories(api: ShopApi, catalog: RwSignal<CatalogState>) {
    leptos::task::spawn_local(async move {
        match api.categories().await {
            Ok(categories) => {
                let _ = catalog.try_update(|c| c.categories = categories);
            }
            Err(e) => leptos::logging::warn!("category list unavailable: {e}"),
        }
    });
}
