//! Title Bar Component
//!
//! Dashboard heading with the log toggle and the logout control.

use leptos::prelude::*;

use crate::components::LogPanel;
use crate::context::use_app_context;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let (show_logs, set_show_logs) = signal(false);

    let logout = move |_| {
        tracing::info!("user logged out");
        ctx.clear_error();
        ctx.logout();
    };

    view! {
        <header class="title-bar">
            <div class="title-text">
                <h1>"Rank Tracker"</h1>
                <p class="subtitle">"Track your pages in Google's top 30 results"</p>
            </div>
            <div class="title-actions">
                <button class="btn btn-secondary" on:click=move |_| set_show_logs.update(|open| *open = !*open)>
                    {move || if show_logs.get() { "Hide log" } else { "Show log" }}
                </button>
                <button class="btn btn-secondary logout-btn" on:click=logout>
                    "Log out"
                </button>
            </div>
        </header>
        <Show when=move || show_logs.get()>
            <LogPanel />
        </Show>
    }
}
