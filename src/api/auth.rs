//! Login Endpoint

use reqwest::Client;

use super::{base, endpoint, read_json};
use crate::error::ApiResult;
use crate::models::{LoginRequest, LoginResponse};

/// Exchange credentials for a bearer token.
///
/// Sent without a token; a 401 here means bad credentials and is reported
/// with the server's detail instead of ending a session.
pub async fn login(username: &str, password: &str) -> ApiResult<LoginResponse> {
    let url = endpoint(base(), "/api/login");
    let response = Client::new()
        .post(&url)
        .json(&LoginRequest { username, password })
        .send()
        .await?;
    let token: LoginResponse = read_json(response, "Incorrect username or password").await?;
    tracing::info!(username, "logged in");
    Ok(token)
}
