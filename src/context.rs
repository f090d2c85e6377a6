//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::error::ApiError;
use crate::session::{self, Route, Session};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current top-level view - read
    pub route: ReadSignal<Route>,
    /// Current top-level view - write
    set_route: WriteSignal<Route>,
    /// Trigger to reload keywords from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload keywords from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Text of the error banner
    pub error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    /// Text of the informational banner
    pub notice: ReadSignal<Option<String>>,
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(initial_route: Route) -> Self {
        let (route, set_route) = signal(initial_route);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (error, set_error) = signal::<Option<String>>(None);
        let (notice, set_notice) = signal::<Option<String>>(None);
        Self {
            route,
            set_route,
            reload_trigger,
            set_reload_trigger,
            error,
            set_error,
            notice,
            set_notice,
        }
    }

    /// Trigger a re-fetch of keywords and client names
    pub fn reload(&self) {
        // Polls outlive the dashboard; ignore ticks after disposal
        let _ = self.set_reload_trigger.try_update(|v| *v += 1);
    }

    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
        session::push_hash(route);
    }

    /// Drop the token and show the login screen
    pub fn logout(&self) {
        Session::browser().sign_out();
        self.set_notice.set(None);
        self.navigate(Route::Login);
    }

    /// Single place where request failures reach the user
    pub fn report_error(&self, err: ApiError, action: &str) {
        if err.is_unauthorized() {
            tracing::warn!(action, "session rejected, returning to login");
            self.set_error.set(None);
            self.logout();
            return;
        }
        tracing::error!(action, error = %err, "request failed");
        self.set_error.set(Some(err.to_string()));
    }

    pub fn set_error_message(&self, message: impl Into<String>) {
        self.set_error.set(Some(message.into()));
    }

    pub fn clear_error(&self) {
        self.set_error.set(None);
    }

    pub fn notify(&self, message: impl Into<String>) {
        self.set_notice.set(Some(message.into()));
    }

    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
