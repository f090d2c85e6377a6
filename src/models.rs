//! Frontend Models
//!
//! Data structures matching the rank tracker API.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Tracked keyword as returned by `GET /api/keywords`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackedKeyword {
    pub id: u32,
    pub keyword: String,
    pub url: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    /// Latest rank (1-30), absent when unchecked or not found
    #[serde(default)]
    pub position: Option<u32>,
    /// Rank from the check before the latest one, when the server sends it
    #[serde(default)]
    pub previous_position: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub checked_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeywordList {
    #[serde(default)]
    pub keywords: Vec<TrackedKeyword>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientNameList {
    #[serde(default)]
    pub client_names: Vec<String>,
}

/// Response of `POST /api/check`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckResponse {
    pub status: String,
    #[serde(default)]
    pub total_keywords: u32,
    #[serde(default)]
    pub message: Option<String>,
}

impl CheckResponse {
    pub fn is_queued(&self) -> bool {
        self.status == "queued"
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub checked_at: Option<String>,
}

/// Response of `GET /api/history/:id`, newest entry first
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PositionHistory {
    pub keyword_id: u32,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

// ========================
// Request Bodies
// ========================

/// Body of `POST /api/track` and `PUT /api/keyword/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRequest {
    pub keyword: String,
    pub url: String,
    pub country: Option<String>,
    pub proxy: Option<String>,
    pub client_name: Option<String>,
}

/// Body of `POST /api/check`; `{}` checks everything
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_id: Option<u32>,
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

// ========================
// Form State
// ========================

/// Raw text of the add/edit keyword form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordDraft {
    pub keyword: String,
    pub url: String,
    pub country: String,
    pub proxy: String,
    pub client_name: String,
}

impl KeywordDraft {
    /// Prefill the inline edit form from an existing record
    pub fn from_keyword(kw: &TrackedKeyword) -> Self {
        Self {
            keyword: kw.keyword.clone(),
            url: kw.url.clone(),
            country: kw.country.clone().unwrap_or_default(),
            proxy: kw.proxy.clone().unwrap_or_default(),
            client_name: kw.client_name.clone().unwrap_or_default(),
        }
    }

    /// Build the request body; keyword and URL are mandatory
    pub fn validate(&self) -> Result<TrackRequest, ApiError> {
        let keyword = self.keyword.trim();
        let url = self.url.trim();
        if keyword.is_empty() || url.is_empty() {
            return Err(ApiError::Validation("Keyword and URL are required".to_string()));
        }
        Ok(TrackRequest {
            keyword: keyword.to_string(),
            url: url.to_string(),
            country: optional(&self.country),
            proxy: optional(&self.proxy),
            client_name: optional(&self.client_name),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(keyword: &str, url: &str) -> KeywordDraft {
        KeywordDraft {
            keyword: keyword.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_rejects_missing_keyword_or_url() {
        for d in [draft("", "https://a.com"), draft("shoes", ""), draft("   ", "  ")] {
            let err = d.validate().unwrap_err();
            assert_eq!(err.to_string(), "Keyword and URL are required");
        }
    }

    #[test]
    fn test_validate_trims_and_blanks_optional_fields() {
        let d = KeywordDraft {
            keyword: "  running shoes ".to_string(),
            url: "https://shop.example/shoes ".to_string(),
            country: "us".to_string(),
            proxy: "   ".to_string(),
            client_name: " Acme ".to_string(),
        };
        let req = d.validate().unwrap();

        assert_eq!(req.keyword, "running shoes");
        assert_eq!(req.url, "https://shop.example/shoes");
        assert_eq!(req.country.as_deref(), Some("us"));
        assert_eq!(req.proxy, None);
        assert_eq!(req.client_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_track_request_sends_nulls_for_blank_fields() {
        let req = draft("shoes", "https://a.com").validate().unwrap();
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "keyword": "shoes",
                "url": "https://a.com",
                "country": null,
                "proxy": null,
                "client_name": null
            })
        );
    }

    #[test]
    fn test_check_request_body() {
        let all = serde_json::to_string(&CheckRequest::default()).unwrap();
        assert_eq!(all, "{}");

        let one = serde_json::to_string(&CheckRequest { keyword_id: Some(7) }).unwrap();
        assert_eq!(one, r#"{"keyword_id":7}"#);
    }

    #[test]
    fn test_keyword_list_tolerates_missing_fields() {
        let body = r#"{"keywords":[
            {"id":3,"keyword":"shoes","url":"https://a.com","country":null,"proxy":null,
             "created_at":"2025-01-02 10:00:00","position":4,"checked_at":"2025-01-03 09:30:00"},
            {"id":2,"keyword":"boots","url":"https://b.com"}
        ]}"#;
        let list: KeywordList = serde_json::from_str(body).unwrap();

        assert_eq!(list.keywords.len(), 2);
        assert_eq!(list.keywords[0].position, Some(4));
        assert_eq!(list.keywords[1].position, None);
        assert_eq!(list.keywords[1].client_name, None);
    }

    #[test]
    fn test_empty_envelopes_default_to_empty_lists() {
        let list: KeywordList = serde_json::from_str("{}").unwrap();
        assert!(list.keywords.is_empty());

        let names: ClientNameList = serde_json::from_str("{}").unwrap();
        assert!(names.client_names.is_empty());
    }

    #[test]
    fn test_check_response_queued() {
        let resp: CheckResponse =
            serde_json::from_str(r#"{"message":"ok","status":"queued","total_keywords":5}"#).unwrap();
        assert!(resp.is_queued());
        assert_eq!(resp.total_keywords, 5);
    }

    #[test]
    fn test_from_keyword_roundtrips_through_validate() {
        let kw = TrackedKeyword {
            id: 1,
            keyword: "shoes".to_string(),
            url: "https://a.com".to_string(),
            country: Some("de".to_string()),
            proxy: None,
            client_name: Some("Acme".to_string()),
            position: Some(3),
            previous_position: None,
            created_at: None,
            checked_at: None,
        };
        let req = KeywordDraft::from_keyword(&kw).validate().unwrap();

        assert_eq!(req.country.as_deref(), Some("de"));
        assert_eq!(req.proxy, None);
        assert_eq!(req.client_name.as_deref(), Some("Acme"));
    }
}
