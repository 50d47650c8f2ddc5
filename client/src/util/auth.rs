//! Route access policies and the guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route component applies the same decision, so the rule lives here
//! as a pure function of the session snapshot and the route's policy. The
//! `ProtectedRoute` component renders whatever this returns.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

pub const HOME_PATH: &str = "/";
/// Where anonymous users are sent.
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const SWEETS_PATH: &str = "/sweets";
pub const PURCHASES_PATH: &str = "/purchases";
pub const ADMIN_PATH: &str = "/admin";

/// Access tier required to view a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy {
    Public,
    Authenticated,
    AdminOnly,
}

/// What the guard does for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still bootstrapping: show a neutral placeholder.
    Wait,
    /// Replace the navigation with `/login`. No return-to is remembered.
    RedirectToLogin,
    /// Render the access-denied notice in place of the view.
    Deny,
    Mount,
}

/// Decide how to handle a navigation. First match wins:
/// loading, then missing identity, then missing admin flag.
pub fn decide(state: &AuthState, policy: RoutePolicy) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if policy == RoutePolicy::Public {
        return GuardDecision::Mount;
    }
    let Some(user) = state.user.as_ref() else {
        return GuardDecision::RedirectToLogin;
    };
    if policy == RoutePolicy::AdminOnly && !user.is_admin {
        return GuardDecision::Deny;
    }
    GuardDecision::Mount
}

/// A navigable route and its policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub policy: RoutePolicy,
}

/// Every route the app serves. `ProtectedRoute` reads its policy from here.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: HOME_PATH, policy: RoutePolicy::Public },
    RouteDescriptor { path: LOGIN_PATH, policy: RoutePolicy::Public },
    RouteDescriptor { path: REGISTER_PATH, policy: RoutePolicy::Public },
    RouteDescriptor { path: SWEETS_PATH, policy: RoutePolicy::Public },
    RouteDescriptor { path: PURCHASES_PATH, policy: RoutePolicy::Authenticated },
    RouteDescriptor { path: ADMIN_PATH, policy: RoutePolicy::AdminOnly },
];

/// Policy for a known path; `None` means the path is unmatched and the
/// router sends it to `/`.
pub fn policy_for(path: &str) -> Option<RoutePolicy> {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    ROUTES.iter().find(|r| r.path == path).map(|r| r.policy)
}

/// Policy enforced for `path`. Paths missing from [`ROUTES`] get the
/// strictest tier.
pub fn guarded_policy(path: &str) -> RoutePolicy {
    policy_for(path).unwrap_or(RoutePolicy::AdminOnly)
}
