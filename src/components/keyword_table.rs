//! Keyword Table Component
//!
//! Loading, empty and populated states of the keyword list. The table and
//! its rows stay mounted across refetches so open edit forms keep their text.

use leptos::prelude::*;

use crate::components::KeywordRow;
use crate::filter::TableState;
use crate::models::TrackedKeyword;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn KeywordTable(
    /// Rows after the search filter
    #[prop(into)]
    keywords: Signal<Vec<TrackedKeyword>>,
) -> impl IntoView {
    let store = use_app_store();

    let state = Memo::new(move |_| {
        TableState::classify(
            store.loading().get(),
            store.keywords().read().len(),
            store.selected_client().read().is_some(),
            keywords.with(|rows| rows.len()),
        )
    });

    view! {
        <div class="table-card">
            {move || match state.get() {
                TableState::Loading => view! {
                    <div class="table-placeholder">
                        <div class="spin-icon spinning large">"⟳"</div>
                        <p>"Loading keywords..."</p>
                    </div>
                }.into_any(),
                TableState::Empty => view! {
                    <div class="table-placeholder">
                        <h3>"No keywords tracked yet"</h3>
                        <p>"Add your first keyword to start tracking rankings"</p>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| store.show_add_form().set(true)
                        >
                            "+ Add Keyword"
                        </button>
                    </div>
                }.into_any(),
                TableState::EmptyForClient => view! {
                    <div class="table-placeholder">
                        <p>"No keywords for this client"</p>
                    </div>
                }.into_any(),
                TableState::NoMatches => view! {
                    <div class="table-placeholder">
                        <p>"No keywords match your search"</p>
                    </div>
                }.into_any(),
                TableState::Rows => ().into_any(),
            }}
            <Show when=move || state.get() == TableState::Rows>
                <table class="keyword-table">
                    <thead>
                        <tr>
                            <th>"Keyword"</th>
                            <th>"URL"</th>
                            <th>"Country"</th>
                            <th>"Client"</th>
                            <th class="center">"Position"</th>
                            <th>"Last Checked"</th>
                            <th class="center">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        // Keyed by id; each row reads its record from the store
                        <For
                            each=move || keywords.get()
                            key=|kw| kw.id
                            children=move |kw| view! { <KeywordRow keyword_id=kw.id /> }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
