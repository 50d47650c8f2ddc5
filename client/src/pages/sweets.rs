//! Public catalog page: listing, search and purchase.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted for everyone. Anonymous visitors can browse and search; the
//! purchase button on each card handles the sign-in check itself.

use leptos::prelude::*;

use crate::components::field_hint::FieldHint;
use crate::components::sweet_card::SweetCard;
use crate::state::auth::Session;
use crate::state::catalog::{CatalogState, load_catalog, load_categories, search_catalog};
use crate::state::notice::NoticeState;
use crate::util::forms::{SearchForm, ValidationError};

#[component]
pub fn SweetsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let catalog = RwSignal::new(CatalogState::default());
    let search = RwSignal::new(SearchForm::default());
    let errors = RwSignal::new(ValidationError::default());

    Effect::new(move || {
        load_catalog(session.api(), catalog, notices);
        load_categories(session.api(), catalog);
    });

    let run_search = move || match search.get_untracked().validate() {
        Ok(query) => {
            errors.set(ValidationError::default());
            search_catalog(session.api(), query, catalog, notices);
        }
        Err(e) => errors.set(e),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_search();
    };
    let on_reset = move |_| {
        search.set(SearchForm::default());
        errors.set(ValidationError::default());
        load_catalog(session.api(), catalog, notices);
    };
    let refresh = Callback::new(move |()| load_catalog(session.api(), catalog, notices));

    view! {
        <div class="sweets-page">
            <h1>"Our Sweets"</h1>
            <form class="search-bar" on:submit=on_submit>
                <input
                    class="search-bar__input"
                    type="search"
                    placeholder="Search by name..."
                    prop:value=move || search.get().name
                    on:input=move |ev| search.update(|s| s.name = event_target_value(&ev))
                />
                <select
                    class="search-bar__select"
                    prop:value=move || search.get().category
                    on:change=move |ev| search.update(|s| s.category = event_target_value(&ev))
                >
                    <option value="">"All Categories"</option>
                    {move || {
                        catalog
                            .get()
                            .categories
                            .into_iter()
                            .map(|category| {
                                let value = category.clone();
                                view! { <option value=value>{category}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <input
                    class="search-bar__price"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Min $"
                    prop:value=move || search.get().min_price
                    on:input=move |ev| search.update(|s| s.min_price = event_target_value(&ev))
                />
                <input
                    class="search-bar__price"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Max $"
                    prop:value=move || search.get().max_price
                    on:input=move |ev| search.update(|s| s.max_price = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Search"</button>
                <button class="btn" type="button" on:click=on_reset>"Reset"</button>
            </form>
            <FieldHint errors=errors field="min_price"/>
            <FieldHint errors=errors field="max_price"/>

            <Show
                when=move || !catalog.get().loading
                fallback=|| view! { <div class="sweets-page__loading"><span class="spinner"></span></div> }
            >
                <Show
                    when=move || !catalog.with(|c| c.items.is_empty())
                    fallback=|| view! {
                        <p class="sweets-page__empty">"No sweets found. Try adjusting your search criteria."</p>
                    }
                >
                    <div class="sweets-page__grid">
                        {move || {
                            catalog
                                .get()
                                .items
                                .into_iter()
                                .map(|sweet| view! { <SweetCard sweet=sweet on_purchased=refresh/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
