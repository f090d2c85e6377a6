//! Log Panel Component
//!
//! The most recent lines from the console logger, for troubleshooting
//! without opening the browser devtools.

use console_logger::RecentLines;
use leptos::prelude::*;

use crate::config::LOG_PANEL_LINES;

#[component]
pub fn LogPanel() -> impl IntoView {
    let recent = expect_context::<RecentLines>();
    let (lines, set_lines) = signal(recent.tail(LOG_PANEL_LINES));

    // The buffer is not reactive; refresh takes a new snapshot
    let refresh = {
        let recent = recent.clone();
        move |_| set_lines.set(recent.tail(LOG_PANEL_LINES))
    };
    let clear = move |_| {
        recent.clear();
        set_lines.set(Vec::new());
    };

    view! {
        <section class="log-panel">
            <div class="log-panel-header">
                <h3>"Recent log"</h3>
                <span class="log-count">{move || format!("{} lines", lines.with(Vec::len))}</span>
                <button class="btn btn-secondary btn-small" on:click=refresh>"Refresh"</button>
                <button class="btn btn-secondary btn-small" on:click=clear>"Clear"</button>
            </div>
            <Show
                when=move || lines.with(|l| !l.is_empty())
                fallback=|| view! { <p class="log-empty">"No log lines yet"</p> }
            >
                <pre class="log-lines">{move || lines.with(|l| l.join("\n"))}</pre>
            </Show>
        </section>
    }
}
