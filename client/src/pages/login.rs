//! Login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Input is validated locally before the credential exchange;
//! on success the session store is updated and the user lands on `/`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_hint::FieldHint;
use crate::state::auth::Session;
use crate::state::notice::{NoticeState, notify_error, notify_success};
use crate::util::forms::{LoginForm, ValidationError};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(ValidationError::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match form.get_untracked().validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationError::default());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(credentials).await {
                Ok(()) => {
                    notify_success(notices, "Login successful!");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => notify_error(notices, "Login failed", &e.0),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1>"Login"</h1>
                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        autocomplete="username"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <FieldHint errors=errors field="email"/>
                <label class="auth-card__label">
                    "Password"
                    <input
                        class="auth-card__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <FieldHint errors=errors field="password"/>
                <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/register">"Register here"</a>
                </p>
            </form>
        </div>
    }
}
