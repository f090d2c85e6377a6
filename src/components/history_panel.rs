//! History Panel Component
//!
//! Side panel listing recent checks for one keyword.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::format::{format_timestamp, local_offset, position_label};
use crate::models::HistoryEntry;
use crate::filter::keyword_title;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::trend::history_trends;

#[component]
pub fn HistoryPanel(keyword_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (entries, set_entries) = signal(Vec::<HistoryEntry>::new());
    let (loaded, set_loaded) = signal(false);

    let title = move || keyword_title(&store.keywords().read(), keyword_id);

    // Refresh alongside the keyword list so polling updates it too
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_history(keyword_id).await {
                Ok(history) => set_entries.set(history.history),
                Err(e) => ctx.report_error(e, "loading position history"),
            }
            set_loaded.set(true);
        });
    });

    view! {
        <aside class="history-panel">
            <header class="history-header">
                <h3>"History: " {title}</h3>
                <button class="banner-close" title="Close" on:click=move |_| store.history_id().set(None)>
                    "×"
                </button>
            </header>
            {move || {
                let list = entries.get();
                if !loaded.get() {
                    view! { <p class="muted">"Loading history..."</p> }.into_any()
                } else if list.is_empty() {
                    view! { <p class="muted">"No checks recorded yet"</p> }.into_any()
                } else {
                    let offset = local_offset();
                    let trends = history_trends(&list);
                    view! {
                        <ol class="history-list">
                            {list.into_iter().zip(trends).map(|(entry, trend)| {
                                let checked = entry.checked_at.as_deref();
                                view! {
                                    <li class="history-entry">
                                        <span class="muted">{format_timestamp(checked, &offset)}</span>
                                        <span class="history-position">{position_label(entry.position, checked)}</span>
                                        {trend.map(|t| view! { <span class=t.css_class()>{t.arrow()}</span> })}
                                    </li>
                                }
                            }).collect_view()}
                        </ol>
                    }.into_any()
                }
            }}
        </aside>
    }
}
