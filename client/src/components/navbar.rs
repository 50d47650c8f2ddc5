//! Top navigation bar with session-aware links.
//!
//! Observes the session signal directly, so login and logout elsewhere in
//! the app update the links without any explicit refresh.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::Session;
use crate::util::auth::{ADMIN_PATH, HOME_PATH, LOGIN_PATH, PURCHASES_PATH, REGISTER_PATH, SWEETS_PATH};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let navigate = use_navigate();

    view! {
        <header class="navbar">
            <nav class="navbar__links">
                <a class="navbar__brand" href=HOME_PATH>"🍭 Sweet Shop"</a>
                <a href=SWEETS_PATH>"Sweets"</a>
                <Show when=move || state.get().is_signed_in()>
                    <a href=PURCHASES_PATH>"My Purchases"</a>
                </Show>
                <Show when=move || state.get().is_admin()>
                    <a href=ADMIN_PATH>"Admin"</a>
                </Show>
            </nav>
            <span class="navbar__spacer"></span>
            {move || {
                let navigate = navigate.clone();
                match state.get().user {
                    Some(user) => view! {
                        <div class="navbar__session">
                            <span class="navbar__welcome">"Welcome, " {user.email}</span>
                            <button
                                class="btn btn--small"
                                on:click=move |_| {
                                    session.logout();
                                    navigate(HOME_PATH, NavigateOptions::default());
                                }
                            >
                                "Logout"
                            </button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="navbar__session">
                            <a class="btn btn--ghost btn--small" href=LOGIN_PATH>"Login"</a>
                            <a class="btn btn--small" href=REGISTER_PATH>"Register"</a>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </header>
    }
}
