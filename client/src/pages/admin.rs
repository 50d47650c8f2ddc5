//! Admin console: catalog CRUD and restocking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only route. Every mutation goes straight to the remote API and the
//! list is reloaded afterwards rather than patched locally, so the table
//! always reflects server-side stock.
//!
//! DESIGN
//! ======
//! Dialog visibility is modelled as `Option` signals: `Some` means open. The
//! dialogs own validation; the page owns the reload.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::field_hint::FieldHint;
use crate::components::protected_route::ProtectedRoute;
use crate::components::sweet_card::{AdminActions, SweetCard};
use crate::net::types::Sweet;
use crate::state::auth::Session;
use crate::state::catalog::{CatalogState, load_catalog};
use crate::state::notice::{NoticeLevel, NoticeState, notify, notify_error, notify_success};
use crate::util::auth::ADMIN_PATH;
use crate::util::forms::{RestockForm, SweetForm, ValidationError};

/// Which record the editor dialog is writing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditorMode {
    Create,
    Edit(i64),
}

impl EditorMode {
    fn heading(self) -> &'static str {
        match self {
            Self::Create => "Add New Sweet",
            Self::Edit(_) => "Edit Sweet",
        }
    }

    fn success(self) -> &'static str {
        match self {
            Self::Create => "Sweet created successfully",
            Self::Edit(_) => "Sweet updated successfully",
        }
    }

    fn failure(self) -> &'static str {
        match self {
            Self::Create => "Failed to create sweet",
            Self::Edit(_) => "Failed to update sweet",
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <ProtectedRoute path=ADMIN_PATH>
            <AdminDashboard/>
        </ProtectedRoute>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let catalog = RwSignal::new(CatalogState::default());
    let editor = RwSignal::new(None::<EditorMode>);
    let editor_form = RwSignal::new(SweetForm::default());
    let delete_target = RwSignal::new(None::<Sweet>);
    let restock_target = RwSignal::new(None::<Sweet>);

    let reload = Callback::new(move |()| load_catalog(session.api(), catalog, notices));
    Effect::new(move || reload.run(()));

    let on_create = move |_| {
        editor_form.set(SweetForm::default());
        editor.set(Some(EditorMode::Create));
    };
    let actions = AdminActions {
        on_edit: Callback::new(move |sweet: Sweet| {
            let prefill = SweetForm::from_sweet(&sweet);
            editor_form.set(prefill.clone());
            editor.set(Some(EditorMode::Edit(sweet.id)));

            // The card may be stale; reload the record before the admin edits it.
            let api = session.api();
            leptos::task::spawn_local(async move {
                match api.get_sweet(sweet.id).await {
                    Ok(latest) => {
                        if editor.try_get_untracked() != Some(Some(EditorMode::Edit(sweet.id))) {
                            return;
                        }
                        let _ = editor_form.try_update(|form| {
                            if let Some(fresh) = refreshed_form(form, &prefill, &latest) {
                                *form = fresh;
                            }
                        });
                    }
                    Err(e) => leptos::logging::warn!("could not refresh sweet {}: {e}", sweet.id),
                }
            });
        }),
        on_restock: Callback::new(move |sweet: Sweet| restock_target.set(Some(sweet))),
        on_delete: Callback::new(move |sweet: Sweet| delete_target.set(Some(sweet))),
    };

    let close_editor = Callback::new(move |()| editor.set(None));
    let close_delete = Callback::new(move |()| delete_target.set(None));
    let close_restock = Callback::new(move |()| restock_target.set(None));

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin Dashboard"</h1>
                <button class="btn btn--primary" on:click=on_create>"Add New Sweet"</button>
            </header>

            <Show
                when=move || !catalog.get().loading
                fallback=|| view! { <div class="admin-page__loading"><span class="spinner"></span></div> }
            >
                <Show
                    when=move || !catalog.with(|c| c.items.is_empty())
                    fallback=|| view! { <p class="admin-page__empty">"No sweets found. Create your first sweet!"</p> }
                >
                    <div class="sweets-page__grid">
                        {move || {
                            catalog
                                .get()
                                .items
                                .into_iter()
                                .map(|sweet| view! { <SweetCard sweet=sweet on_purchased=reload admin=actions/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || editor.get().is_some()>
                <SweetDialog mode=editor form=editor_form on_cancel=close_editor on_saved=reload/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <DeleteSweetDialog target=delete_target on_cancel=close_delete on_deleted=reload/>
            </Show>
            <Show when=move || restock_target.get().is_some()>
                <RestockDialog target=restock_target on_cancel=close_restock on_restocked=reload/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating or editing a sweet.
#[component]
fn SweetDialog(
    mode: RwSignal<Option<EditorMode>>,
    form: RwSignal<SweetForm>,
    on_cancel: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let errors = RwSignal::new(ValidationError::default());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let Some(current) = mode.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        let draft = match form.get_untracked().validate() {
            Ok(draft) => draft,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationError::default());
        busy.set(true);

        let api = session.api();
        leptos::task::spawn_local(async move {
            let result = match current {
                EditorMode::Create => api.create_sweet(&draft).await,
                EditorMode::Edit(id) => api.update_sweet(id, &draft).await,
            };
            match result {
                Ok(_) => {
                    notify_success(notices, current.success());
                    let _ = mode.try_set(None);
                    on_saved.run(());
                }
                Err(e) => {
                    notify_error(notices, current.failure(), &e);
                    let _ = busy.try_set(false);
                }
            }
        });
    });

    let heading = move || mode.get().map(EditorMode::heading).unwrap_or_default();
    let text_field = move |label: &'static str, field: &'static str, kind: &'static str| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type=kind
                    step=(kind == "number").then_some("any")
                    prop:value=move || form.with(|f| field_value(f, field).to_owned())
                    on:input=move |ev| form.update(|f| set_field(f, field, event_target_value(&ev)))
                />
            </label>
            <FieldHint errors=errors field=field/>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                {text_field("Name", "name", "text")}
                {text_field("Category", "category", "text")}
                {text_field("Price", "price", "number")}
                {text_field("Quantity", "quantity", "number")}
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <FieldHint errors=errors field="description"/>
                {text_field("Image URL", "image_url", "url")}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Form contents to show once the latest record arrives, or `None` when
/// the admin has already started typing over the prefill.
fn refreshed_form(current: &SweetForm, prefill: &SweetForm, latest: &Sweet) -> Option<SweetForm> {
    (current == prefill).then(|| SweetForm::from_sweet(latest))
}

fn field_value<'a>(form: &'a SweetForm, field: &str) -> &'a str {
    match field {
        "name" => &form.name,
        "category" => &form.category,
        "price" => &form.price,
        "quantity" => &form.quantity,
        "description" => &form.description,
        "image_url" => &form.image_url,
        _ => "",
    }
}

fn set_field(form: &mut SweetForm, field: &str, value: String) {
    match field {
        "name" => form.name = value,
        "category" => form.category = value,
        "price" => form.price = value,
        "quantity" => form.quantity = value,
        "description" => form.description = value,
        "image_url" => form.image_url = value,
        _ => {}
    }
}

#[component]
fn DeleteSweetDialog(target: RwSignal<Option<Sweet>>, on_cancel: Callback<()>, on_deleted: Callback<()>) -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let Some(sweet) = target.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = session.api();
        leptos::task::spawn_local(async move {
            match api.delete_sweet(sweet.id).await {
                Ok(()) => {
                    notify_success(notices, "Sweet deleted successfully");
                    on_deleted.run(());
                }
                Err(e) => notify_error(notices, "Failed to delete sweet", &e),
            }
            let _ = target.try_set(None);
        });
    });

    let name = move || target.get().map(|s| s.name).unwrap_or_default();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Sweet"</h2>
                <p class="dialog__danger">
                    "Are you sure you want to delete " <strong>{name}</strong> "? This cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RestockDialog(
    target: RwSignal<Option<Sweet>>,
    on_cancel: Callback<()>,
    on_restocked: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let form = RwSignal::new(RestockForm::default());
    let errors = RwSignal::new(ValidationError::default());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let Some(sweet) = target.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        let quantity = match form.get_untracked().validate() {
            Ok(quantity) => quantity,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationError::default());
        busy.set(true);

        let api = session.api();
        leptos::task::spawn_local(async move {
            match api.restock(sweet.id, quantity).await {
                Ok(result) => {
                    notify(
                        notices,
                        NoticeLevel::Success,
                        "Restocked successfully",
                        Some(format!("{}: {} → {}", sweet.name, result.old_quantity, result.new_quantity)),
                    );
                    let _ = target.try_set(None);
                    on_restocked.run(());
                }
                Err(e) => {
                    notify_error(notices, "Failed to restock", &e);
                    let _ = busy.try_set(false);
                }
            }
        });
    });

    let title = move || target.get().map(|s| format!("Restock {}", s.name)).unwrap_or_default();
    let current = move || target.get().map(|s| format!("Current stock: {}", s.quantity)).unwrap_or_default();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p>{current}</p>
                <label class="dialog__label">
                    "Quantity to add"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || form.get().quantity
                        on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <FieldHint errors=errors field="quantity"/>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Restock"
                    </button>
                </div>
            </div>
        </div>
    }
}
