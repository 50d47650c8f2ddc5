//! Typed form inputs and their validation.
//!
//! Each form is a plain struct of the raw input strings with one `validate`
//! that either produces the request payload or the full list of field
//! errors. Nothing is sent until validation passes. Limits mirror the shop
//! API's schemas so most rejections never reach the network.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Credentials, Registration, SearchQuery, Sweet, SweetDraft};

pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 100;
pub const FULL_NAME_MAX: usize = 255;
pub const SWEET_NAME_MAX: usize = 100;
pub const CATEGORY_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 1000;
pub const IMAGE_URL_MAX: usize = 500;
pub const PRICE_MAX: f64 = 1000.0;

/// One invalid field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Client-side validation failure; blocks submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("form has invalid fields")]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }

    /// First message recorded for `field`.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.errors.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// Loose shape check; the API does the authoritative validation.
pub fn is_plausible_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !raw.chars().any(char::is_whitespace)
}

fn check_email(errors: &mut ValidationError, email: &str) {
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !is_plausible_email(email) {
        errors.add("email", "Enter a valid email address");
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Lists every missing or malformed field.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let mut errors = ValidationError::default();
        let email = self.email.trim();
        check_email(&mut errors, email);
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.finish(|| Credentials { email: email.to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Lists every missing or malformed field.
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        let mut errors = ValidationError::default();
        let email = self.email.trim();
        check_email(&mut errors, email);

        let password_len = self.password.chars().count();
        if password_len == 0 {
            errors.add("password", "Password is required");
        } else if password_len < PASSWORD_MIN {
            errors.add("password", format!("Password must be at least {PASSWORD_MIN} characters"));
        } else if password_len > PASSWORD_MAX {
            errors.add("password", format!("Password must be at most {PASSWORD_MAX} characters"));
        }

        let full_name = optional(&self.full_name);
        if full_name.as_ref().is_some_and(|n| n.chars().count() > FULL_NAME_MAX) {
            errors.add("full_name", format!("Full name must be at most {FULL_NAME_MAX} characters"));
        }

        errors.finish(|| Registration { email: email.to_owned(), password: self.password.clone(), full_name })
    }
}

/// Admin create/edit form for a catalog item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweetForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
    pub image_url: String,
}

impl SweetForm {
    /// Prefill from an existing item for editing.
    pub fn from_sweet(sweet: &Sweet) -> Self {
        Self {
            name: sweet.name.clone(),
            category: sweet.category.clone(),
            price: sweet.price.to_string(),
            quantity: sweet.quantity.to_string(),
            description: sweet.description.clone().unwrap_or_default(),
            image_url: sweet.image_url.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// Lists every missing, malformed or out-of-range field.
    pub fn validate(&self) -> Result<SweetDraft, ValidationError> {
        let mut errors = ValidationError::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Name is required");
        } else if name.chars().count() > SWEET_NAME_MAX {
            errors.add("name", format!("Name must be at most {SWEET_NAME_MAX} characters"));
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.add("category", "Category is required");
        } else if category.chars().count() > CATEGORY_MAX {
            errors.add("category", format!("Category must be at most {CATEGORY_MAX} characters"));
        }

        let price = match self.price.trim() {
            "" => {
                errors.add("price", "Price is required");
                0.0
            }
            raw => match raw.parse::<f64>() {
                Ok(p) if p.is_finite() && p > 0.0 && p <= PRICE_MAX => p,
                Ok(_) => {
                    errors.add("price", format!("Price must be greater than 0 and at most {PRICE_MAX}"));
                    0.0
                }
                Err(_) => {
                    errors.add("price", "Price must be a number");
                    0.0
                }
            },
        };

        let quantity = match self.quantity.trim() {
            "" => {
                errors.add("quantity", "Quantity is required");
                0
            }
            raw => match raw.parse::<i64>() {
                Ok(q) if q >= 0 => q,
                Ok(_) => {
                    errors.add("quantity", "Quantity cannot be negative");
                    0
                }
                Err(_) => {
                    errors.add("quantity", "Quantity must be a whole number");
                    0
                }
            },
        };

        let description = optional(&self.description);
        if description.as_ref().is_some_and(|d| d.chars().count() > DESCRIPTION_MAX) {
            errors.add("description", format!("Description must be at most {DESCRIPTION_MAX} characters"));
        }
        let image_url = optional(&self.image_url);
        if image_url.as_ref().is_some_and(|u| u.chars().count() > IMAGE_URL_MAX) {
            errors.add("image_url", format!("Image URL must be at most {IMAGE_URL_MAX} characters"));
        }

        errors.finish(|| SweetDraft {
            name: name.to_owned(),
            category: category.to_owned(),
            price,
            quantity,
            description,
            image_url,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestockForm {
    pub quantity: String,
}

impl RestockForm {
    /// # Errors
    ///
    /// Rejects anything but a positive whole number.
    pub fn validate(&self) -> Result<u32, ValidationError> {
        let mut errors = ValidationError::default();
        let quantity = match self.quantity.trim().parse::<u32>() {
            Ok(q) if q > 0 => q,
            _ => {
                errors.add("quantity", "Restock quantity must be a positive whole number");
                0
            }
        };
        errors.finish(|| quantity)
    }
}

/// Catalog search bar. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub name: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
}

impl SearchForm {
    /// # Errors
    ///
    /// Rejects unparsable or negative prices and an inverted range.
    pub fn validate(&self) -> Result<SearchQuery, ValidationError> {
        let mut errors = ValidationError::default();
        let min_price = parse_price_bound(&mut errors, "min_price", &self.min_price);
        let max_price = parse_price_bound(&mut errors, "max_price", &self.max_price);
        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                errors.add("max_price", "Maximum price must not be below the minimum");
            }
        }
        errors.finish(|| SearchQuery {
            name: optional(&self.name),
            category: optional(&self.category),
            min_price,
            max_price,
        })
    }
}

fn parse_price_bound(errors: &mut ValidationError, field: &'static str, raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => {
            errors.add(field, "Enter a non-negative price");
            None
        }
    }
}
