//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TrackedKeyword;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Keywords as last fetched (already filtered by client)
    pub keywords: Vec<TrackedKeyword>,
    /// Known client names for the filter and form suggestions
    pub client_names: Vec<String>,
    /// Client filter, `None` = all clients
    pub selected_client: Option<String>,
    /// Client-side keyword search
    pub search_term: String,
    /// A keyword fetch is in flight
    pub loading: bool,
    /// A check request is in flight
    pub checking: bool,
    pub show_add_form: bool,
    /// Keyword whose row is in inline edit mode
    pub editing_id: Option<u32>,
    /// Keyword whose history panel is open
    pub history_id: Option<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Find a keyword in the store by ID (tracked, for memos and views)
pub fn store_find_keyword(store: &AppStore, id: u32) -> Option<TrackedKeyword> {
    store.keywords().read().iter().find(|kw| kw.id == id).cloned()
}

/// Drop per-session state when the user logs out
pub fn store_reset(store: &AppStore) {
    store.keywords().write().clear();
    store.client_names().write().clear();
    store.selected_client().set(None);
    store.search_term().set(String::new());
    store.show_add_form().set(false);
    store.editing_id().set(None);
    store.history_id().set(None);
}
