//! Toolbar Component
//!
//! Add / Check All controls and the keyword count.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::filter::tracking_summary;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Toolbar(
    /// Number of rows left after the search filter
    #[prop(into)]
    visible_count: Signal<usize>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let check_disabled = move || store.checking().get() || store.keywords().read().is_empty();

    view! {
        <div class="toolbar">
            <div class="toolbar-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| store.show_add_form().update(|open| *open = !*open)
                >
                    "+ Add Keyword"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=check_disabled
                    on:click=move |_| actions::check_rankings(ctx, store, None)
                >
                    <span class=move || if store.checking().get() { "spin-icon spinning" } else { "spin-icon" }>"⟳"</span>
                    {move || if store.checking().get() { "Checking..." } else { "Check All" }}
                </button>
            </div>
            <div class="toolbar-summary">
                {move || tracking_summary(visible_count.get())}
            </div>
        </div>
    }
}
