//! Login Page Component
//!
//! Exchanges credentials for a bearer token and opens the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ErrorBanner;
use crate::context::use_app_context;
use crate::session::{Route, Session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get().trim().to_string();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            ctx.set_error_message("Username and password are required");
            return;
        }

        set_submitting.set(true);
        ctx.clear_error();
        spawn_local(async move {
            let result = match api::login(&user, &pass).await {
                Ok(token) => Session::browser().sign_in(&token),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    password.set(String::new());
                    ctx.navigate(Route::Dashboard);
                }
                Err(e) => ctx.report_error(e, "logging in"),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=submit>
                <h1>"Rank Tracker"</h1>
                <p class="subtitle">"Sign in to manage tracked keywords"</p>
                <ErrorBanner />
                <label class="form-field">
                    <span class="form-label">"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-label">"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
