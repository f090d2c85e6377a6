//! Keyword Endpoints
//!
//! CRUD for tracked keywords plus the client-name list.

use reqwest::Method;

use super::{base, endpoint, ensure_success, keyword_url, keywords_url, read_json, request, send};
use crate::error::ApiResult;
use crate::models::{ClientNameList, KeywordList, TrackRequest, TrackedKeyword};

pub async fn list_keywords(client_name: Option<&str>) -> ApiResult<Vec<TrackedKeyword>> {
    let url = keywords_url(base(), client_name);
    let response = send(request(Method::GET, &url)).await?;
    let list: KeywordList = read_json(response, "Failed to fetch keywords").await?;
    tracing::debug!(count = list.keywords.len(), ?client_name, "fetched keywords");
    Ok(list.keywords)
}

pub async fn list_client_names() -> ApiResult<Vec<String>> {
    let url = endpoint(base(), "/api/client-names");
    let response = send(request(Method::GET, &url)).await?;
    let list: ClientNameList = read_json(response, "Failed to fetch client names").await?;
    Ok(list.client_names)
}

pub async fn create_keyword(req: &TrackRequest) -> ApiResult<()> {
    let url = endpoint(base(), "/api/track");
    let response = send(request(Method::POST, &url).json(req)).await?;
    ensure_success(response, "Failed to add keyword").await?;
    tracing::info!(keyword = %req.keyword, url = %req.url, "keyword added");
    Ok(())
}

pub async fn update_keyword(id: u32, req: &TrackRequest) -> ApiResult<()> {
    let url = keyword_url(base(), id);
    let response = send(request(Method::PUT, &url).json(req)).await?;
    ensure_success(response, "Failed to update keyword").await?;
    tracing::info!(id, keyword = %req.keyword, "keyword updated");
    Ok(())
}

pub async fn delete_keyword(id: u32) -> ApiResult<()> {
    let url = keyword_url(base(), id);
    let response = send(request(Method::DELETE, &url)).await?;
    ensure_success(response, "Failed to delete keyword").await?;
    tracing::info!(id, "keyword deleted");
    Ok(())
}
