//! Purchase history for the signed-in user.

#[cfg(test)]
#[path = "purchases_test.rs"]
mod purchases_test;

use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::net::types::{Purchase, format_price};
use crate::state::auth::Session;
use crate::state::notice::{NoticeState, notify_error};
use crate::util::auth::PURCHASES_PATH;

#[component]
pub fn PurchasesPage() -> impl IntoView {
    view! {
        <ProtectedRoute path=PURCHASES_PATH>
            <PurchaseHistory/>
        </ProtectedRoute>
    }
}

#[component]
fn PurchaseHistory() -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let purchases = RwSignal::new(None::<Vec<Purchase>>);

    Effect::new(move || {
        let api = session.api();
        leptos::task::spawn_local(async move {
            match api.my_purchases().await {
                Ok(items) => {
                    let _ = purchases.try_set(Some(items));
                }
                Err(e) => {
                    notify_error(notices, "Error loading purchases", &e);
                    let _ = purchases.try_set(Some(Vec::new()));
                }
            }
        });
    });

    view! {
        <div class="purchases-page">
            <h1>"My Purchases"</h1>
            {move || match purchases.get() {
                None => view! { <div class="purchases-page__loading"><span class="spinner"></span></div> }.into_any(),
                Some(items) if items.is_empty() => view! {
                    <p class="purchases-page__empty">
                        "No purchases yet. "
                        <a href="/sweets">"Browse the catalog"</a>
                    </p>
                }
                .into_any(),
                Some(items) => view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Sweet"</th>
                                <th>"Quantity"</th>
                                <th>"Unit price"</th>
                                <th>"Total"</th>
                                <th>"Status"</th>
                                <th>"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {items.into_iter().map(purchase_row).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </div>
    }
}

fn purchase_label(purchase: &Purchase) -> String {
    purchase.sweet_name.clone().unwrap_or_else(|| format!("Sweet #{}", purchase.sweet_id))
}

/// Calendar date of an ISO-8601 timestamp.
fn purchase_date(created_at: &str) -> &str {
    created_at.split('T').next().unwrap_or_default()
}

fn purchase_row(purchase: Purchase) -> impl IntoView {
    let label = purchase_label(&purchase);
    let date = purchase_date(&purchase.created_at).to_owned();
    view! {
        <tr>
            <td>{label}</td>
            <td>{purchase.quantity}</td>
            <td>{format_price(purchase.unit_price)}</td>
            <td>{format_price(purchase.total_price)}</td>
            <td>{purchase.status}</td>
            <td>{date}</td>
        </tr>
    }
}
