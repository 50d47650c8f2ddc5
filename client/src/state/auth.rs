//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. One [`Session`] is created at app start
//! and provided through context; every consumer reads the same signal.
//!
//! DESIGN
//! ======
//! The transitions (`bootstrap`, `login`, `register`, `logout`) are plain
//! functions over an [`ApiClient`], so they run unchanged against the browser
//! transport and against scripted transports in tests. [`Session`] only adds
//! the reactive write-back.
//!
//! TRADE-OFFS
//! ==========
//! Concurrent transitions are last-writer-wins. The UI never issues two at
//! once, so no versioning is done.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::storage::TokenStore;
use crate::net::api::{ApiClient, ShopApi};
use crate::net::error::AuthError;
use crate::net::http::Transport;
use crate::net::types::{Credentials, Registration, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True only while the startup bootstrap is in flight.
    pub loading: bool,
}

impl AuthState {
    /// Initial state: anonymous, waiting for bootstrap.
    pub fn bootstrapping() -> Self {
        Self { user: None, loading: true }
    }

    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// Resolve the stored token into a session.
///
/// With a token present the identity is fetched from `/api/auth/me`; any
/// failure drops the token and yields an anonymous session. Never fails and
/// always ends with `loading == false`.
///
/// The token is only dropped if the slot still holds the one that was
/// checked; a login that saved a new token in the meantime keeps it.
pub async fn bootstrap<T: Transport, S: TokenStore>(api: &ApiClient<T, S>) -> AuthState {
    let Some(checked) = api.tokens().load() else {
        return AuthState::anonymous();
    };
    match api.current_user().await {
        Ok(user) => AuthState::signed_in(user),
        Err(e) => {
            leptos::logging::warn!("stored token rejected, starting anonymous: {e}");
            if api.tokens().load().as_deref() == Some(checked.as_str()) {
                api.tokens().clear();
            }
            AuthState::anonymous()
        }
    }
}

/// Exchange credentials for a token and load the server's view of the user.
///
/// On failure the stored token is put back exactly as it was.
///
/// # Errors
///
/// Returns [`AuthError`] when the exchange or the identity fetch fails.
pub async fn login<T: Transport, S: TokenStore>(
    api: &ApiClient<T, S>,
    credentials: &Credentials,
) -> Result<User, AuthError> {
    let previous = api.tokens().load();
    let token = api.login(credentials).await?;
    api.tokens().save(&token.access_token);
    match api.current_user().await {
        Ok(user) => Ok(user),
        Err(e) => {
            restore_token(api.tokens(), previous.as_deref());
            Err(e.into())
        }
    }
}

/// Create an account, trust the returned identity, then obtain a token for it.
///
/// # Errors
///
/// Returns [`AuthError`] when registration or the follow-up token exchange
/// fails. The account may exist after a failed token exchange; the session
/// is left untouched either way.
pub async fn register<T: Transport, S: TokenStore>(
    api: &ApiClient<T, S>,
    registration: &Registration,
) -> Result<User, AuthError> {
    let user = api.register(registration).await?;
    let token = api.login(&registration.credentials()).await?;
    api.tokens().save(&token.access_token);
    Ok(user)
}

/// Drop the stored token and return the anonymous state. Idempotent.
pub fn logout<S: TokenStore>(tokens: &S) -> AuthState {
    tokens.clear();
    AuthState::anonymous()
}

fn restore_token<S: TokenStore>(tokens: &S, previous: Option<&str>) {
    match previous {
        Some(token) => tokens.save(token),
        None => tokens.clear(),
    }
}

/// Reactive session store provided via context.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
    api: StoredValue<ShopApi>,
}

impl Session {
    pub fn new(api: ShopApi) -> Self {
        Self { state: RwSignal::new(AuthState::bootstrapping()), api: StoredValue::new(api) }
    }

    /// Read-only view for guards and the navbar.
    pub fn state(self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn api(self) -> ShopApi {
        self.api.get_value()
    }

    /// Kick off the one-time token bootstrap.
    ///
    /// A login that lands first wins; the bootstrap result is dropped once
    /// loading has already ended.
    pub fn bootstrap(self) {
        if !self.state.get_untracked().loading {
            return;
        }
        leptos::task::spawn_local(async move {
            let next = bootstrap(&self.api()).await;
            let _ = self.state.try_update(|state| {
                if state.loading {
                    *state = next;
                }
            });
        });
    }

    /// # Errors
    ///
    /// Returns [`AuthError`]; the session is unchanged on failure.
    pub async fn login(self, credentials: Credentials) -> Result<(), AuthError> {
        let user = login(&self.api(), &credentials).await?;
        leptos::logging::log!("signed in as {}", user.email);
        let _ = self.state.try_set(AuthState::signed_in(user));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`AuthError`]; the session is unchanged on failure.
    pub async fn register(self, registration: Registration) -> Result<(), AuthError> {
        let user = register(&self.api(), &registration).await?;
        leptos::logging::log!("registered {}", user.email);
        let _ = self.state.try_set(AuthState::signed_in(user));
        Ok(())
    }

    pub fn logout(self) {
        let next = self.api.with_value(|api| logout(api.tokens()));
        self.state.set(next);
    }
}
