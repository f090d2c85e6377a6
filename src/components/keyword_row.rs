//! Keyword Row Component
//!
//! One table row, switching to an inline edit form while editing.

use leptos::prelude::*;

use crate::actions;
use crate::components::{DeleteKeywordButton, KeywordForm};
use crate::context::use_app_context;
use crate::format::{format_timestamp, local_offset, position_label};
use crate::models::{KeywordDraft, TrackRequest};
use crate::store::{store_find_keyword, use_app_store, AppStateStoreFields};
use crate::trend::Trend;

const EMPTY_CELL: &str = "-";

/// One keyword row, identified by id so refetches update it in place
#[component]
pub fn KeywordRow(keyword_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = keyword_id;
    let keyword = Memo::new(move |_| store_find_keyword(&store, id));
    let is_editing = move || store.editing_id().get() == Some(id);

    // Seeded once per edit session; refetches while editing must not reset it
    let edit_row = move || {
        let draft = keyword
            .get_untracked()
            .map(|kw| KeywordDraft::from_keyword(&kw))
            .unwrap_or_default();
        view! {
            <tr class="editing-row">
                <td colspan="7">
                    <KeywordForm
                        form_id=format!("edit-{}", id)
                        title="Edit Tracking"
                        submit_label="Save"
                        initial=draft
                        on_submit=move |req: TrackRequest| actions::update_keyword(ctx, store, id, req)
                        on_cancel=move |_| store.editing_id().set(None)
                    />
                </td>
            </tr>
        }
    };

    let display_row = move || {
        let Some(kw) = keyword.get() else {
            return ().into_any();
        };
        let offset = local_offset();
        let trend = Trend::between(kw.position, kw.previous_position);
        let badge_class = if kw.position.is_some() { "position-badge" } else { "position-missing" };
        let position = position_label(kw.position, kw.checked_at.as_deref());
        let checked = format_timestamp(kw.checked_at.as_deref(), &offset);
        let history_open = move || store.history_id().get() == Some(id);

        view! {
            <tr class="keyword-row">
                <td class="keyword-cell">"🔍 " {kw.keyword.clone()}</td>
                <td>
                    <a class="keyword-url" href=kw.url.clone() target="_blank" rel="noopener noreferrer">
                        {kw.url.clone()}
                    </a>
                </td>
                <td>{kw.country.clone().unwrap_or_else(|| EMPTY_CELL.to_string())}</td>
                <td>{kw.client_name.clone().unwrap_or_else(|| EMPTY_CELL.to_string())}</td>
                <td class="center">
                    <span class=badge_class>{position}</span>
                    {trend.map(|t| view! { <span class=t.css_class()>{t.arrow()}</span> })}
                </td>
                <td class="muted">{checked}</td>
                <td class="center actions">
                    <button
                        class="icon-btn"
                        title="Check this keyword"
                        disabled=move || store.checking().get()
                        on:click=move |_| actions::check_rankings(ctx, store, Some(id))
                    >
                        "⟳"
                    </button>
                    <button
                        class=move || if history_open() { "icon-btn active" } else { "icon-btn" }
                        title="Position history"
                        on:click=move |_| {
                            store.history_id().update(|open| {
                                *open = if *open == Some(id) { None } else { Some(id) };
                            });
                        }
                    >
                        "📈"
                    </button>
                    <button
                        class="icon-btn"
                        title="Edit"
                        on:click=move |_| {
                            ctx.clear_error();
                            store.editing_id().set(Some(id));
                        }
                    >
                        "✎"
                    </button>
                    <DeleteKeywordButton
                        keyword=kw.keyword.clone()
                        on_delete=move |_| actions::delete_keyword(ctx, store, id)
                    />
                </td>
            </tr>
        }
        .into_any()
    };

    move || {
        if is_editing() {
            edit_row().into_any()
        } else {
            display_row()
        }
    }
}
