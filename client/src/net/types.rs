//! Wire-schema DTOs for the remote shop API.
//!
//! DESIGN
//! ======
//! These types mirror the API's JSON payloads field for field so serde
//! decoding stays strict. Timestamps stay as the server's ISO 8601 strings;
//! the client only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated identity as returned by `/api/auth/me` and
/// `/api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric subject identifier.
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Credentials for the form-encoded login exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Registration {
    /// The same email/password pair, for the token exchange after signup.
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }
}

/// A catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_in_stock: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update payload for a catalog item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweetDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Catalog search filters. Only populated filters reach the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchQuery {
    /// Query pairs for `/api/sweets/search`, skipping empty filters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            pairs.push(("name", name.to_owned()));
        }
        if let Some(category) = self.category.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            pairs.push(("category", category.to_owned()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", max.to_string()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Body of `POST /api/inventory/purchase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PurchaseRequest {
    pub sweet_id: i64,
    pub quantity: u32,
}

/// A completed purchase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub user_id: i64,
    pub sweet_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub sweet_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

/// Response body of `POST /api/inventory/restock/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockResult {
    pub message: String,
    pub old_quantity: i64,
    pub new_quantity: i64,
    pub added_quantity: i64,
}

/// Format a price for display, e.g. `$2.50`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
