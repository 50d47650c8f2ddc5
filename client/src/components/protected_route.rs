//! Route wrapper that applies the access policy before mounting a view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::Session;
use crate::util::auth::{GuardDecision, LOGIN_PATH, decide, guarded_policy};

/// Renders `children` only when the current session satisfies the policy
/// the route table assigns to `path`.
///
/// Re-evaluates whenever the session changes, so a logout on a protected
/// page sends the user to `/login` immediately.
#[component]
pub fn ProtectedRoute(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<Session>().state();
    let policy = guarded_policy(path);

    move || match decide(&state.get(), policy) {
        GuardDecision::Wait => view! {
            <div class="guard guard--waiting" aria-busy="true">
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        GuardDecision::RedirectToLogin => view! {
            <Redirect path=LOGIN_PATH options=NavigateOptions { replace: true, ..NavigateOptions::default() }/>
        }
        .into_any(),
        GuardDecision::Deny => view! {
            <div class="guard guard--denied">
                <p>"Access Denied: Admin privileges required"</p>
            </div>
        }
        .into_any(),
        GuardDecision::Mount => children().into_any(),
    }
}
