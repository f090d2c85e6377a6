//! Rank Tracker Frontend App
//!
//! Root component: provides shared state and switches between login and
//! dashboard.

use console_logger::RecentLines;
use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Dashboard, LoginPage};
use crate::context::AppContext;
use crate::session::{self, Route, Session};
use crate::store::{store_reset, AppState};

#[component]
pub fn App(
    /// Buffer the console logger writes into, shown by the log panel
    recent: RecentLines,
) -> impl IntoView {
    let initial = Route::resolve(&session::current_hash(), Session::browser().is_authenticated());
    let ctx = AppContext::new(initial);
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);
    provide_context(recent);
    session::push_hash(initial);

    // Back/forward and hand-edited hashes
    let _ = window_event_listener(ev::hashchange, move |_| {
        let route = Route::resolve(&session::current_hash(), Session::browser().is_authenticated());
        if route != ctx.route.get_untracked() {
            ctx.navigate(route);
        }
    });

    // Nothing from a previous session survives on the login screen
    Effect::new(move |_| {
        if ctx.route.get() == Route::Login {
            store_reset(&store);
        }
    });

    view! {
        <div class="app-layout">
            {move || match ctx.route.get() {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Dashboard => view! { <Dashboard /> }.into_any(),
            }}
        </div>
    }
}
