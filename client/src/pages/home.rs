//! Landing page with entry points into the shop.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Welcome to the Sweet Shop"</h1>
                <p>"Hand-picked chocolates, candies and treats, restocked daily."</p>
            </section>
            <div class="home-page__cards">
                <a class="home-card" href="/sweets">
                    <h2>"Browse Sweets"</h2>
                    <p>"Explore the full catalog and search by name or category."</p>
                </a>
                <a class="home-card" href="/register">
                    <h2>"Join Us"</h2>
                    <p>"Create an account to start purchasing."</p>
                </a>
                <a class="home-card" href="/admin">
                    <h2>"Admin Panel"</h2>
                    <p>"Manage the catalog and restock inventory."</p>
                </a>
            </div>
        </div>
    }
}
