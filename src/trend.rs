//! Position Trends
//!
//! Ranks count down toward 1, so a smaller number is an improvement.

use crate::models::HistoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Same,
}

impl Trend {
    /// Compare the latest rank with the one before it
    pub fn between(current: Option<u32>, previous: Option<u32>) -> Option<Trend> {
        let (current, previous) = (current?, previous?);
        Some(if current < previous {
            Trend::Up
        } else if current > previous {
            Trend::Down
        } else {
            Trend::Same
        })
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "trend trend-up",
            Trend::Down => "trend trend-down",
            Trend::Same => "trend trend-same",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Same => "=",
        }
    }
}

/// Trend of each history entry against the next older one.
/// Entries arrive newest first; the oldest has nothing to compare with.
pub fn history_trends(entries: &[HistoryEntry]) -> Vec<Option<Trend>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let older = entries.get(i + 1).and_then(|e| e.position);
            Trend::between(entry.position, older)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(position: Option<u32>) -> HistoryEntry {
        HistoryEntry { position, checked_at: None }
    }

    #[test]
    fn test_lower_rank_is_improvement() {
        assert_eq!(Trend::between(Some(3), Some(7)), Some(Trend::Up));
        assert_eq!(Trend::between(Some(9), Some(2)), Some(Trend::Down));
        assert_eq!(Trend::between(Some(5), Some(5)), Some(Trend::Same));
    }

    #[test]
    fn test_missing_side_has_no_trend() {
        assert_eq!(Trend::between(None, Some(4)), None);
        assert_eq!(Trend::between(Some(4), None), None);
    }

    #[test]
    fn test_colors() {
        assert!(Trend::Up.css_class().contains("trend-up"));
        assert!(Trend::Down.css_class().contains("trend-down"));
        assert!(Trend::Same.css_class().contains("trend-same"));
    }

    #[test]
    fn test_history_trends_compare_with_older_entry() {
        let entries = vec![entry(Some(2)), entry(Some(5)), entry(None), entry(Some(8))];
        assert_eq!(
            history_trends(&entries),
            vec![Some(Trend::Up), None, None, None]
        );
    }

    #[test]
    fn test_history_trends_empty() {
        assert!(history_trends(&[]).is_empty());
    }
}
