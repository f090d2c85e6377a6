//! Status Banners
//!
//! The single error banner and the informational notice.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.error.get().map(|message| view! {
            <div class="banner banner-error" role="alert">
                <div class="banner-body">
                    <p class="banner-title">"Error"</p>
                    <p class="banner-text">{message}</p>
                </div>
                <button class="banner-close" title="Dismiss" on:click=move |_| ctx.clear_error()>"×"</button>
            </div>
        })}
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="banner banner-notice" role="status">
                <p class="banner-text">{message}</p>
                <button class="banner-close" title="Dismiss" on:click=move |_| ctx.clear_notice()>"×"</button>
            </div>
        })}
    }
}
