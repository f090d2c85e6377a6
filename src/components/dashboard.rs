//! Dashboard Component
//!
//! Keyword management view shown after login.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api;
use crate::components::{
    ErrorBanner, FilterBar, HistoryPanel, KeywordForm, KeywordTable, NoticeBanner, TitleBar, Toolbar,
};
use crate::context::use_app_context;
use crate::filter::{filter_keywords, response_is_current};
use crate::models::TrackRequest;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Load keywords when the trigger or the client filter changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let client = store.selected_client().get();
        tracing::debug!(trigger, ?client, "loading keywords");
        store.loading().set(true);
        spawn_local(async move {
            let result = api::list_keywords(client.as_deref()).await;
            // The filter may have moved on while this request was in flight
            let selected = store.selected_client().get_untracked();
            if !response_is_current(client.as_deref(), selected.as_deref()) {
                tracing::debug!(trigger, ?client, ?selected, "dropping stale keyword list");
                return;
            }
            match result {
                Ok(loaded) => store.keywords().set(loaded),
                Err(e) => ctx.report_error(e, "fetching keywords"),
            }
            store.loading().set(false);
        });
    });

    // Client names can change after any add/edit
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_client_names().await {
                Ok(names) => store.client_names().set(names),
                Err(e) => ctx.report_error(e, "fetching client names"),
            }
        });
    });

    let visible = Memo::new(move |_| {
        filter_keywords(&store.keywords().read(), &store.search_term().read())
    });
    let visible_count = Signal::derive(move || visible.with(|rows| rows.len()));

    view! {
        <div class="dashboard">
            <TitleBar />
            <ErrorBanner />
            <NoticeBanner />
            <Toolbar visible_count=visible_count />
            <FilterBar />

            <Show when=move || store.show_add_form().get()>
                <div class="form-card">
                    <KeywordForm
                        form_id="add"
                        title="Add New Tracking"
                        submit_label="Add Tracking"
                        on_submit=move |req: TrackRequest| actions::add_keyword(ctx, store, req)
                        on_cancel=move |_| store.show_add_form().set(false)
                    />
                </div>
            </Show>

            <div class="content-row">
                <KeywordTable keywords=visible />
                {move || store.history_id().get().map(|id| view! { <HistoryPanel keyword_id=id /> })}
            </div>

            <div class="note">
                <strong>"Note: "</strong>
                "This tracks positions 1-30 in Google search results. When you click \"Check All\", \
                 keywords are queued for processing on your local PC with a visible browser. \
                 Results will appear automatically when scraping completes."
            </div>
        </div>
    }
}
