//! Catalog card for one sweet, with the purchase action and optional admin
//! controls.
//!
//! ERROR HANDLING
//! ==============
//! Purchase failures never leave the card: refusals and API errors become
//! notices. A reply that lands after the card was removed is dropped.

use leptos::prelude::*;

use crate::net::types::{Sweet, format_price};
use crate::state::auth::Session;
use crate::state::catalog::{LOGIN_TO_PURCHASE, PurchaseError, purchase_one};
use crate::state::notice::{NoticeLevel, NoticeState, notify, notify_error};

/// Admin callbacks; when present the card shows Edit, Restock and Delete.
#[derive(Clone, Copy)]
pub struct AdminActions {
    pub on_edit: Callback<Sweet>,
    pub on_restock: Callback<Sweet>,
    pub on_delete: Callback<Sweet>,
}

#[component]
pub fn SweetCard(
    sweet: Sweet,
    /// Runs after a successful purchase so the owner can refresh stock.
    #[prop(optional)]
    on_purchased: Option<Callback<()>>,
    #[prop(optional)] admin: Option<AdminActions>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let busy = RwSignal::new(false);

    let in_stock = sweet.is_in_stock;
    let buy_target = sweet.clone();
    let on_buy = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = session.api();
        let auth = session.state().get_untracked();
        let sweet = buy_target.clone();
        leptos::task::spawn_local(async move {
            let outcome = purchase_one(&api, &auth, &sweet).await;
            if busy.is_disposed() {
                return;
            }
            match outcome {
                Ok(_) => {
                    notify(
                        notices,
                        NoticeLevel::Success,
                        "Purchase successful!",
                        Some(format!("You bought 1 {}", sweet.name)),
                    );
                    if let Some(cb) = on_purchased {
                        cb.run(());
                    }
                }
                Err(PurchaseError::LoginRequired) => notify(notices, NoticeLevel::Warning, LOGIN_TO_PURCHASE, None),
                Err(e @ PurchaseError::OutOfStock(_)) => {
                    notify(notices, NoticeLevel::Warning, "Out of stock", Some(e.to_string()));
                }
                Err(PurchaseError::Api(e)) => notify_error(notices, "Purchase failed", &e),
            }
            let _ = busy.try_set(false);
        });
    };

    let admin_controls = admin.map(|actions| {
        let edit = sweet.clone();
        let restock = sweet.clone();
        let delete = sweet.clone();
        view! {
            <div class="sweet-card__admin">
                <button class="btn btn--small" on:click=move |_| actions.on_edit.run(edit.clone())>
                    "Edit"
                </button>
                <button class="btn btn--small" on:click=move |_| actions.on_restock.run(restock.clone())>
                    "Restock"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| actions.on_delete.run(delete.clone())>
                    "Delete"
                </button>
            </div>
        }
    });

    let Sweet { name, category, price, quantity, description, image_url, .. } = sweet;

    view! {
        <article class="sweet-card">
            {image_url.map(|src| view! { <img class="sweet-card__image" src=src alt=name.clone()/> })}
            <header class="sweet-card__header">
                <h3 class="sweet-card__name">{name.clone()}</h3>
                <span class="badge">{category}</span>
            </header>
            {description.map(|d| view! { <p class="sweet-card__description">{d}</p> })}
            <div class="sweet-card__meta">
                <span class="sweet-card__price">{format_price(price)}</span>
                <span class="sweet-card__stock">{format!("Stock: {quantity}")}</span>
            </div>
            <button
                class="btn btn--primary sweet-card__buy"
                disabled=move || !in_stock || busy.get()
                on:click=on_buy
            >
                {if in_stock { "Purchase" } else { "Out of Stock" }}
            </button>
            {admin_controls}
        </article>
    }
}
