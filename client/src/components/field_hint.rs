//! Inline validation message under a form field.

use leptos::prelude::*;

use crate::util::forms::ValidationError;

#[component]
pub fn FieldHint(errors: RwSignal<ValidationError>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.message_for(field)
                .map(|message| view! { <p class="field-hint">{message.to_owned()}</p> })
        })
    }
}
