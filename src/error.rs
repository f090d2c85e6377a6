//! API Errors
//!
//! Everything that can go wrong between a button click and the banner.

use serde::Deserialize;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401 from any authenticated request; the token is already cleared
    Unauthorized,
    /// Non-success status with the message to show
    Status { status: u16, detail: String },
    /// Request never produced a response
    Network(String),
    /// Response body did not match the expected shape
    Decode(String),
    /// Rejected before sending
    Validation(String),
    /// Browser storage unavailable
    Storage(String),
}

impl ApiError {
    /// Map a failed response to an error, preferring the server's `detail`
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let detail = detail_from_body(body).unwrap_or_else(|| fallback.to_string());
        ApiError::Status { status, detail }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Session expired, please log in again"),
            ApiError::Status { detail, .. } => write!(f, "{}", detail),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// FastAPI puts a string in `detail` for HTTPException and a list for
/// validation failures; only the string form is shown to users.
fn detail_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_is_used() {
        let err = ApiError::from_response(
            400,
            r#"{"detail":"Keyword with this URL and country is already being tracked"}"#,
            "Failed to add keyword",
        );
        assert_eq!(
            err.to_string(),
            "Keyword with this URL and country is already being tracked"
        );
    }

    #[test]
    fn test_fallback_when_body_has_no_detail() {
        for body in ["", "Internal Server Error", r#"{"message":"x"}"#, r#"{"detail":""}"#] {
            let err = ApiError::from_response(500, body, "Failed to delete keyword");
            assert_eq!(err.to_string(), "Failed to delete keyword");
        }
    }

    #[test]
    fn test_validation_list_detail_falls_back() {
        let body = r#"{"detail":[{"loc":["body","url"],"msg":"field required"}]}"#;
        let err = ApiError::from_response(422, body, "Failed to update keyword");
        assert_eq!(
            err,
            ApiError::Status { status: 422, detail: "Failed to update keyword".to_string() }
        );
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
    }
}
