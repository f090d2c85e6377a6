//! Display Formatting
//!
//! Text shown in table cells and banners.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// SQLite `CURRENT_TIMESTAMP` and naive ISO variants, all UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// Offset of the browser's local time zone
pub fn local_offset() -> FixedOffset {
    *Local::now().offset()
}

/// Render a server timestamp in `offset`; absent means never checked
pub fn format_timestamp(raw: Option<&str>, offset: &FixedOffset) -> String {
    let raw = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return "Never".to_string(),
    };
    match parse_timestamp(raw) {
        Some(utc) => utc.with_timezone(offset).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Badge text for the position column
pub fn position_label(position: Option<u32>, checked_at: Option<&str>) -> String {
    match position {
        Some(p) => format!("#{}", p),
        None if checked_at.map_or(false, |c| !c.trim().is_empty()) => "Not in top 30".to_string(),
        None => "Not checked".to_string(),
    }
}

/// Notice shown after a check is queued
pub fn queued_message(total_keywords: u32) -> String {
    format!(
        "Scraping started! {} keyword(s) queued for local processing. \
         Results will appear automatically when your local scraper processes them.",
        total_keywords
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_missing_timestamp_is_never() {
        assert_eq!(format_timestamp(None, &utc()), "Never");
        assert_eq!(format_timestamp(Some("  "), &utc()), "Never");
    }

    #[test]
    fn test_sqlite_timestamp_is_utc() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_timestamp(Some("2025-03-01 23:30:00"), &cet), "2025-03-02 00:30");
        assert_eq!(format_timestamp(Some("2025-03-01 08:05:09.123"), &utc()), "2025-03-01 08:05");
    }

    #[test]
    fn test_rfc3339_keeps_its_offset() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_timestamp(Some("2025-03-01T12:00:00+02:00"), &est),
            "2025-03-01 05:00"
        );
        assert_eq!(format_timestamp(Some("2025-03-01T12:00:00"), &utc()), "2025-03-01 12:00");
    }

    #[test]
    fn test_unparsable_timestamp_is_shown_verbatim() {
        assert_eq!(format_timestamp(Some("yesterday"), &utc()), "yesterday");
    }

    #[test]
    fn test_position_labels() {
        assert_eq!(position_label(Some(4), Some("2025-01-01 00:00:00")), "#4");
        assert_eq!(position_label(None, Some("2025-01-01 00:00:00")), "Not in top 30");
        assert_eq!(position_label(None, None), "Not checked");
        assert_eq!(position_label(None, Some("")), "Not checked");
    }

    #[test]
    fn test_queued_message_mentions_count() {
        assert!(queued_message(3).starts_with("Scraping started! 3 keyword(s) queued"));
    }
}
