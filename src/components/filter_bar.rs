//! Filter Bar Component
//!
//! Client selector (server-side filter) and keyword search (client-side).

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    let on_client_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        tracing::debug!(client = %value, "client filter changed");
        store
            .selected_client()
            .set(if value.is_empty() { None } else { Some(value) });
    };

    view! {
        <div class="filter-bar">
            <select
                class="client-filter"
                on:change=on_client_change
                prop:value=move || store.selected_client().get().unwrap_or_default()
            >
                <option value="">"All clients"</option>
                {move || store.client_names().get().into_iter().map(|name| {
                    let selected = store.selected_client().get().as_deref() == Some(name.as_str());
                    view! { <option value=name.clone() selected=selected>{name.clone()}</option> }
                }).collect_view()}
            </select>
            <input
                type="search"
                class="search-input"
                placeholder="Search keywords..."
                prop:value=move || store.search_term().get()
                on:input=move |ev| store.search_term().set(event_target_value(&ev))
            />
        </div>
    }
}
