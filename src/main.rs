//! Rank Tracker Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod format;
mod models;
mod poll;
mod session;
mod store;
mod trend;

use app::App;
use config::{AppConfig, LOG_HISTORY};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::get();
    let recent = console_logger::init(config.log_level, LOG_HISTORY);
    tracing::info!(api_url = %config.api_url, "rank tracker starting");

    mount_to_body(move || view! { <App recent=recent /> });
}
