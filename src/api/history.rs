//! Position History Endpoint

use reqwest::Method;

use super::{base, history_url, read_json, request, send};
use crate::error::ApiResult;
use crate::models::PositionHistory;

pub async fn get_history(keyword_id: u32) -> ApiResult<PositionHistory> {
    let url = history_url(base(), keyword_id);
    let response = send(request(Method::GET, &url)).await?;
    let history: PositionHistory = read_json(response, "Failed to load position history").await?;
    tracing::debug!(keyword_id, entries = history.history.len(), "fetched history");
    Ok(history)
}
