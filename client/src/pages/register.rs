//! Registration page.
//!
//! Creates the account, signs the new user in and returns to `/`. Field rules
//! mirror the remote API's schema so most rejections never leave the browser.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_hint::FieldHint;
use crate::state::auth::Session;
use crate::state::notice::{NoticeState, notify_error, notify_success};
use crate::util::forms::{RegisterForm, ValidationError};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(ValidationError::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match form.get_untracked().validate() {
            Ok(registration) => registration,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationError::default());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(registration).await {
                Ok(()) => {
                    notify_success(notices, "Registration successful!");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => notify_error(notices, "Registration failed", &e.0),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1>"Register"</h1>
                <label class="auth-card__label">
                    "Full name (optional)"
                    <input
                        class="auth-card__input"
                        type="text"
                        autocomplete="name"
                        prop:value=move || form.get().full_name
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                </label>
                <FieldHint errors=errors field="full_name"/>
                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        autocomplete="email"
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
                        autocomplete="new-password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <FieldHint errors=errors field="password"/>
                <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Login here"</a>
                </p>
            </form>
        </div>
    }
}
