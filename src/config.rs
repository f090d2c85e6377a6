//! Build-time Configuration
//!
//! Values are baked in at compile time through environment variables:
//! `RANK_TRACKER_API_URL` and `RANK_TRACKER_LOG`.

use std::sync::OnceLock;

use tracing::Level;

use crate::poll::PollPlan;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Polling cadence after a check is queued
pub const POLL_PERIOD_MS: u32 = 10_000;
pub const POLL_DURATION_MS: u32 = 300_000;

/// Lines of log history kept in memory for the log panel
pub const LOG_HISTORY: usize = 200;

/// Lines the log panel shows at once
pub const LOG_PANEL_LINES: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without trailing slash
    pub api_url: String,
    pub poll: PollPlan,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_url: normalize_base_url(api_url.unwrap_or(DEFAULT_API_URL)),
            poll: PollPlan::default(),
            log_level: parse_level(log_level.unwrap_or("info")),
        }
    }

    fn from_build_env() -> Self {
        Self::from_values(option_env!("RANK_TRACKER_API_URL"), option_env!("RANK_TRACKER_LOG"))
    }

    /// Process-wide configuration
    pub fn get() -> &'static AppConfig {
        static CONFIG: OnceLock<AppConfig> = OnceLock::new();
        CONFIG.get_or_init(AppConfig::from_build_env)
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.poll.period_ms, POLL_PERIOD_MS);
        assert_eq!(config.poll.duration_ms, POLL_DURATION_MS);
    }

    #[test]
    fn test_base_url_is_normalized() {
        assert_eq!(normalize_base_url(" https://api.example.com/// "), "https://api.example.com");
        assert_eq!(normalize_base_url("/"), DEFAULT_API_URL);
        assert_eq!(normalize_base_url(""), DEFAULT_API_URL);
    }

    #[test]
    fn test_log_level_parsing() {
        let config = AppConfig::from_values(Some("https://x"), Some("DEBUG"));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(parse_level("Warning"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }
}
