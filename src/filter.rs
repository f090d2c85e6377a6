//! Keyword Filtering
//!
//! Client-side search over the fetched list. Client-name filtering happens
//! on the server through the `client_name` query parameter.

use crate::models::TrackedKeyword;

/// Case-insensitive substring match on keyword text; a blank term keeps all
pub fn filter_keywords(keywords: &[TrackedKeyword], term: &str) -> Vec<TrackedKeyword> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return keywords.to_vec();
    }
    keywords
        .iter()
        .filter(|kw| kw.keyword.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// What the keyword table area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// First fetch still in flight
    Loading,
    /// Nothing tracked at all
    Empty,
    /// The selected client has no keywords
    EmptyForClient,
    /// Keywords exist but none match the search
    NoMatches,
    Rows,
}

impl TableState {
    /// Only the kind matters, so refetches that keep rows on screen stay `Rows`
    pub fn classify(loading: bool, fetched: usize, client_selected: bool, visible: usize) -> Self {
        if fetched == 0 {
            if loading {
                TableState::Loading
            } else if client_selected {
                TableState::EmptyForClient
            } else {
                TableState::Empty
            }
        } else if visible == 0 {
            TableState::NoMatches
        } else {
            TableState::Rows
        }
    }
}

/// Whether a keyword response fetched for `requested` still matches the filter
pub fn response_is_current(requested: Option<&str>, selected: Option<&str>) -> bool {
    fn norm(c: Option<&str>) -> Option<&str> {
        c.map(str::trim).filter(|c| !c.is_empty())
    }
    norm(requested) == norm(selected)
}

/// Keyword text for a panel heading, `#id` once the record is gone
pub fn keyword_title(keywords: &[TrackedKeyword], id: u32) -> String {
    keywords
        .iter()
        .find(|kw| kw.id == id)
        .map(|kw| kw.keyword.clone())
        .unwrap_or_else(|| format!("#{}", id))
}

pub fn tracking_summary(count: usize) -> String {
    if count == 1 {
        "Tracking 1 keyword".to_string()
    } else {
        format!("Tracking {} keywords", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(id: u32, keyword: &str) -> TrackedKeyword {
        TrackedKeyword {
            id,
            keyword: keyword.to_string(),
            url: format!("https://example.com/{}", id),
            country: None,
            proxy: None,
            client_name: None,
            position: None,
            previous_position: None,
            created_at: None,
            checked_at: None,
        }
    }

    #[test]
    fn test_blank_term_keeps_everything() {
        let list = vec![kw(1, "Running Shoes"), kw(2, "boots")];
        assert_eq!(filter_keywords(&list, "").len(), 2);
        assert_eq!(filter_keywords(&list, "   ").len(), 2);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let list = vec![kw(1, "Running Shoes"), kw(2, "trail shoes"), kw(3, "boots")];
        let found = filter_keywords(&list, "SHOE");

        let ids: Vec<u32> = found.iter().map(|k| k.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_only_keyword_text_is_searched() {
        let list = vec![kw(1, "boots")];
        assert!(filter_keywords(&list, "example.com").is_empty());
    }

    #[test]
    fn test_summary_counts_filtered_list() {
        let list = vec![kw(1, "shoes"), kw(2, "boots"), kw(3, "shoe laces")];
        let shown = filter_keywords(&list, "shoe");
        assert_eq!(tracking_summary(shown.len()), "Tracking 2 keywords");
        assert_eq!(tracking_summary(1), "Tracking 1 keyword");
        assert_eq!(tracking_summary(0), "Tracking 0 keywords");
    }

    #[test]
    fn test_table_stays_in_rows_while_refetching() {
        // A poll tick flips loading on and off with rows already on screen
        assert_eq!(TableState::classify(true, 3, false, 3), TableState::Rows);
        assert_eq!(TableState::classify(false, 3, false, 3), TableState::Rows);
        assert_eq!(TableState::classify(true, 3, true, 1), TableState::Rows);
    }

    #[test]
    fn test_table_placeholders() {
        assert_eq!(TableState::classify(true, 0, false, 0), TableState::Loading);
        assert_eq!(TableState::classify(false, 0, false, 0), TableState::Empty);
        assert_eq!(TableState::classify(false, 4, false, 0), TableState::NoMatches);
    }

    #[test]
    fn test_empty_client_is_not_first_run() {
        assert_eq!(TableState::classify(false, 0, true, 0), TableState::EmptyForClient);
        assert_eq!(TableState::classify(true, 0, true, 0), TableState::Loading);
    }

    #[test]
    fn test_stale_client_response_is_dropped() {
        assert!(response_is_current(Some("Acme"), Some("Acme")));
        assert!(response_is_current(None, None));
        assert!(response_is_current(Some(" "), None));
        assert!(!response_is_current(Some("Acme"), Some("Globex")));
        assert!(!response_is_current(None, Some("Acme")));
        assert!(!response_is_current(Some("Acme"), None));
    }

    #[test]
    fn test_keyword_title_follows_current_record() {
        let mut list = vec![kw(1, "shoes"), kw(2, "boots")];
        assert_eq!(keyword_title(&list, 2), "boots");

        list[1].keyword = "winter boots".to_string();
        assert_eq!(keyword_title(&list, 2), "winter boots");

        list.remove(1);
        assert_eq!(keyword_title(&list, 2), "#2");
    }
}
