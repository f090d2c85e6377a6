//! Rank Check Endpoint
//!
//! Queues scraping work for the external local scraper.

use reqwest::Method;

use super::{base, endpoint, read_json, request, send};
use crate::error::ApiResult;
use crate::models::{CheckRequest, CheckResponse};

/// Queue one keyword, or all of them when `keyword_id` is `None`
pub async fn queue_check(keyword_id: Option<u32>) -> ApiResult<CheckResponse> {
    let url = endpoint(base(), "/api/check");
    let body = CheckRequest { keyword_id };
    let response = send(request(Method::POST, &url).json(&body)).await?;
    let result: CheckResponse = read_json(response, "Failed to check rankings").await?;
    tracing::info!(
        ?keyword_id,
        status = %result.status,
        total = result.total_keywords,
        "rank check requested"
    );
    Ok(result)
}
