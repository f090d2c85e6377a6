//! HTTP API Client
//!
//! Frontend bindings to the rank tracker backend, organized by resource.
//! Every request carries the stored bearer token; any 401 ends the session.

mod auth;
mod check;
mod history;
mod keyword;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::{Session, TokenStore};

// Re-export all public items
pub use auth::*;
pub use check::*;
pub use history::*;
pub use keyword::*;

// ========================
// URLs
// ========================

fn base() -> &'static str {
    &AppConfig::get().api_url
}

pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

/// `GET /api/keywords`, filtered server-side when a client is selected
pub fn keywords_url(base: &str, client_name: Option<&str>) -> String {
    match client_name.map(str::trim).filter(|c| !c.is_empty()) {
        Some(client) => format!(
            "{}/api/keywords?client_name={}",
            base,
            utf8_percent_encode(client, NON_ALPHANUMERIC)
        ),
        None => endpoint(base, "/api/keywords"),
    }
}

pub fn keyword_url(base: &str, id: u32) -> String {
    format!("{}/api/keyword/{}", base, id)
}

pub fn history_url(base: &str, id: u32) -> String {
    format!("{}/api/history/{}", base, id)
}

// ========================
// Request Plumbing
// ========================

fn request(method: Method, url: &str) -> RequestBuilder {
    let builder = Client::new().request(method, url);
    match Session::browser().token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Send an authenticated request; a 401 clears the token
async fn send(builder: RequestBuilder) -> ApiResult<Response> {
    let response = builder.send().await?;
    if let Err(e) = check_unauthorized(response.status(), &Session::browser()) {
        tracing::warn!(url = %response.url(), "401 from api, session cleared");
        return Err(e);
    }
    Ok(response)
}

/// End the session on 401; any other status passes through
pub fn check_unauthorized<S: TokenStore>(status: StatusCode, session: &Session<S>) -> ApiResult<()> {
    if status == StatusCode::UNAUTHORIZED {
        session.sign_out();
        return Err(ApiError::Unauthorized);
    }
    Ok(())
}

async fn ensure_success(response: Response, fallback: &str) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), body = %body, "api request failed");
    Err(ApiError::from_response(status.as_u16(), &body, fallback))
}

async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> ApiResult<T> {
    let response = ensure_success(response, fallback).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginResponse;
    use crate::session::{MemoryStore, Route};

    const BASE: &str = "https://api.example.com";

    #[test]
    fn test_keywords_url_without_filter() {
        assert_eq!(keywords_url(BASE, None), "https://api.example.com/api/keywords");
        assert_eq!(keywords_url(BASE, Some("  ")), "https://api.example.com/api/keywords");
    }

    #[test]
    fn test_keywords_url_encodes_client_name() {
        assert_eq!(
            keywords_url(BASE, Some("Acme & Sons")),
            "https://api.example.com/api/keywords?client_name=Acme%20%26%20Sons"
        );
    }

    fn signed_in() -> Session<MemoryStore> {
        let session = Session::new(MemoryStore::default());
        session
            .sign_in(&LoginResponse {
                access_token: "abc.def.ghi".to_string(),
                token_type: "bearer".to_string(),
            })
            .unwrap();
        session
    }

    #[test]
    fn test_401_clears_token_and_routes_to_login() {
        let session = signed_in();
        assert_eq!(Route::resolve(Route::Dashboard.hash(), session.is_authenticated()), Route::Dashboard);

        let result = check_unauthorized(StatusCode::UNAUTHORIZED, &session);

        assert_eq!(result, Err(ApiError::Unauthorized));
        assert!(!session.is_authenticated());
        assert_eq!(Route::resolve(Route::Dashboard.hash(), session.is_authenticated()), Route::Login);
    }

    #[test]
    fn test_other_statuses_keep_the_session() {
        let session = signed_in();
        for status in [StatusCode::OK, StatusCode::BAD_REQUEST, StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR] {
            assert_eq!(check_unauthorized(status, &session), Ok(()));
        }
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_resource_urls() {
        assert_eq!(keyword_url(BASE, 12), "https://api.example.com/api/keyword/12");
        assert_eq!(history_url(BASE, 12), "https://api.example.com/api/history/12");
        assert_eq!(endpoint(BASE, "/api/check"), "https://api.example.com/api/check");
    }
}
