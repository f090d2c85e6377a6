//! Session and Routing
//!
//! Bearer token persistence and the two views it decides between.

use crate::error::{ApiError, ApiResult};
use crate::models::LoginResponse;

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Persistent home of the bearer token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> ApiResult<()>;
    fn clear(&self);
}

/// Token kept in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        let token = Self::storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        let storage = Self::storage()
            .ok_or_else(|| ApiError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Login state on top of a token store
#[derive(Debug, Clone, Copy, Default)]
pub struct Session<S = LocalTokenStore> {
    store: S,
}

impl Session<LocalTokenStore> {
    pub fn browser() -> Self {
        Self::new(LocalTokenStore)
    }
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist the token from a successful login
    pub fn sign_in(&self, response: &LoginResponse) -> ApiResult<()> {
        let token = response.access_token.trim();
        if token.is_empty() {
            return Err(ApiError::Decode("login returned an empty token".to_string()));
        }
        if !response.token_type.eq_ignore_ascii_case("bearer") {
            return Err(ApiError::Decode(format!(
                "unsupported token type '{}'",
                response.token_type
            )));
        }
        self.store.save(token)
    }

    pub fn sign_out(&self) {
        self.store.clear();
    }
}

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn hash(&self) -> &'static str {
        match self {
            Route::Login => "#/login",
            Route::Dashboard => "#/",
        }
    }

    /// Pick the view for a location hash; without a token only login is reachable
    pub fn resolve(hash: &str, authenticated: bool) -> Route {
        if !authenticated || hash == Route::Login.hash() {
            Route::Login
        } else {
            Route::Dashboard
        }
    }
}

/// Current location hash, empty outside a browser
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Reflect a route in the address bar
pub fn push_hash(route: Route) {
    if let Some(window) = web_sys::window() {
        if window.location().hash().ok().as_deref() != Some(route.hash()) {
            let _ = window.location().set_hash(route.hash());
        }
    }
}

/// In-memory token store for tests
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryStore {
    token: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }
    fn save(&self, token: &str) -> ApiResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }
    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
