//! Stack of transient notices in the corner of the viewport.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let class = format!("notice {}", notice.level.css_modifier());
                        view! {
                            <div class=class>
                                <strong class="notice__title">{notice.title}</strong>
                                {notice.detail.map(|d| view! { <p class="notice__detail">{d}</p> })}
                                <button
                                    class="notice__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| notices.update(|s| s.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
