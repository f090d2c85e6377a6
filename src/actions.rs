//! Dashboard Actions
//!
//! Handlers shared by the toolbar, the form and the table rows. Each one
//! spawns its request, reports failures through the context and re-fetches
//! the keyword list after a successful change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::format::queued_message;
use crate::models::TrackRequest;
use crate::poll::start_polling;
use crate::store::{AppStateStoreFields, AppStore};

pub fn add_keyword(ctx: AppContext, store: AppStore, req: TrackRequest) {
    ctx.clear_error();
    spawn_local(async move {
        match api::create_keyword(&req).await {
            Ok(()) => {
                store.show_add_form().set(false);
                ctx.reload();
            }
            Err(e) => ctx.report_error(e, "adding keyword"),
        }
    });
}

pub fn update_keyword(ctx: AppContext, store: AppStore, id: u32, req: TrackRequest) {
    ctx.clear_error();
    spawn_local(async move {
        match api::update_keyword(id, &req).await {
            Ok(()) => {
                store.editing_id().set(None);
                ctx.reload();
            }
            Err(e) => ctx.report_error(e, "updating keyword"),
        }
    });
}

/// Only called after the row's inline confirmation
pub fn delete_keyword(ctx: AppContext, store: AppStore, id: u32) {
    ctx.clear_error();
    spawn_local(async move {
        match api::delete_keyword(id).await {
            Ok(()) => {
                if store.history_id().get_untracked() == Some(id) {
                    store.history_id().set(None);
                }
                ctx.reload();
            }
            Err(e) => ctx.report_error(e, "deleting keyword"),
        }
    });
}

/// Queue a rank check and poll for results when the server accepts it
pub fn check_rankings(ctx: AppContext, store: AppStore, keyword_id: Option<u32>) {
    store.checking().set(true);
    ctx.clear_error();
    spawn_local(async move {
        match api::queue_check(keyword_id).await {
            Ok(resp) if resp.is_queued() => {
                ctx.notify(queued_message(resp.total_keywords));
                start_polling(AppConfig::get().poll, move || ctx.reload());
            }
            Ok(resp) => {
                tracing::warn!(status = %resp.status, "check was not queued");
                ctx.notify(resp.message.unwrap_or(resp.status));
            }
            Err(e) => ctx.report_error(e, "checking rankings"),
        }
        store.checking().set(false);
    });
}
