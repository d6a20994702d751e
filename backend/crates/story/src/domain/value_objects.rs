//! Value Objects
//!
//! Dates cross the API as epoch milliseconds; everything inside the crate
//! uses `DateTime<Utc>`.

use chrono::{DateTime, Utc};

use crate::error::{StoryError, StoryResult};

// ============================================================================
// Epoch milliseconds
// ============================================================================

/// Epoch milliseconds to a UTC timestamp
pub fn from_millis(ms: i64) -> StoryResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| StoryError::InvalidDate(format!("{ms} is out of range")))
}

/// Parse a query-string bound such as `startDate=1717200000000`
pub fn parse_millis(raw: &str) -> StoryResult<DateTime<Utc>> {
    let ms = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| StoryError::InvalidDate(format!("'{raw}' is not epoch milliseconds")))?;
    from_millis(ms)
}

pub fn to_millis(at: &DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

// ============================================================================
// Search Term
// ============================================================================

/// Free-text search, matched case-insensitively as a plain substring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Absent or blank query is a validation error
    pub fn new(raw: Option<&str>) -> StoryResult<Self> {
        match raw.map(str::trim) {
            Some(term) if !term.is_empty() => Ok(Self(term.to_string())),
            _ => Err(StoryError::MissingQuery),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// `%term%` for `ILIKE ... ESCAPE '\'`; wildcards in the term match literally
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

// ============================================================================
// Visited Range
// ============================================================================

/// Inclusive `[start, end]` range over `visited_date`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitedRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl VisitedRange {
    /// Both bounds are required; an inverted range is valid and matches nothing
    pub fn from_query(start: Option<&str>, end: Option<&str>) -> StoryResult<Self> {
        let (Some(start), Some(end)) = (non_blank(start), non_blank(end)) else {
            return Err(StoryError::MissingDateRange);
        };

        Ok(Self {
            start: parse_millis(start)?,
            end: parse_millis(end)?,
        })
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        &self.start <= at && at <= &self.end
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_conversions() {
        let at = from_millis(1_717_200_000_123).unwrap();
        assert_eq!(to_millis(&at), 1_717_200_000_123);
        assert_eq!(parse_millis(" 1717200000123 ").unwrap(), at);

        assert!(matches!(parse_millis("yesterday"), Err(StoryError::InvalidDate(_))));
        assert!(matches!(from_millis(i64::MAX), Err(StoryError::InvalidDate(_))));
    }

    #[test]
    fn test_search_term_required() {
        assert!(matches!(SearchTerm::new(None), Err(StoryError::MissingQuery)));
        assert!(matches!(SearchTerm::new(Some("  ")), Err(StoryError::MissingQuery)));
        assert_eq!(SearchTerm::new(Some(" Paris ")).unwrap().as_str(), "Paris");
    }

    #[test]
    fn test_search_term_matches_case_insensitively() {
        let term = SearchTerm::new(Some("paris")).unwrap();
        assert!(term.matches("Paris-Downtown"));
        assert!(term.matches("a weekend in PARIS"));
        assert!(!term.matches("Lyon"));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        let term = SearchTerm::new(Some("100%_off\\")).unwrap();
        assert_eq!(term.like_pattern(), "%100\\%\\_off\\\\%");
    }

    #[test]
    fn test_visited_range() {
        let range = VisitedRange::from_query(Some("1000"), Some("2000")).unwrap();
        assert!(range.contains(&from_millis(1000).unwrap()));
        assert!(range.contains(&from_millis(2000).unwrap()));
        assert!(!range.contains(&from_millis(2001).unwrap()));
        assert!(!range.contains(&from_millis(999).unwrap()));
    }

    #[test]
    fn test_visited_range_requires_both_bounds() {
        for (start, end) in [(None, Some("1")), (Some("1"), None), (Some(""), Some("1"))] {
            assert!(matches!(
                VisitedRange::from_query(start, end),
                Err(StoryError::MissingDateRange)
            ));
        }
        assert!(matches!(
            VisitedRange::from_query(Some("soon"), Some("1")),
            Err(StoryError::InvalidDate(_))
        ));
    }
}
