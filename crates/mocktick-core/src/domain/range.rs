use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::date::TradeDate;

/// Lookback applied when no start date is given.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 90;

/// Inclusive calendar date range with `start <= end`.
///
/// Resolution never raises: a malformed date string or an inverted range
/// yields `None`, which callers treat as an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: TradeDate,
    end: TradeDate,
}

impl DateRange {
    pub fn new(start: TradeDate, end: TradeDate) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// Resolve optional `YYYY-MM-DD` strings against the current UTC date.
    ///
    /// A missing end defaults to today; a missing start defaults to
    /// [`DEFAULT_LOOKBACK_DAYS`] before today.
    pub fn resolve(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        Self::resolve_as_of(start, end, TradeDate::today_utc())
    }

    /// Resolution with an injected "today", so tests pin the clock.
    pub fn resolve_as_of(
        start: Option<&str>,
        end: Option<&str>,
        today: TradeDate,
    ) -> Option<Self> {
        let end = match end {
            Some(raw) => TradeDate::parse(raw).ok()?,
            None => today,
        };
        let start = match start {
            Some(raw) => TradeDate::parse(raw).ok()?,
            None => today.minus_days(DEFAULT_LOOKBACK_DAYS),
        };
        Self::new(start, end)
    }

    pub fn start(&self) -> TradeDate {
        self.start
    }

    pub fn end(&self) -> TradeDate {
        self.end
    }

    /// Number of calendar days covered, both endpoints included. Always >= 1.
    pub fn day_count(&self) -> u64 {
        (self.end.days_since(self.start) + 1) as u64
    }

    /// Chronologically ascending dates of the range.
    pub fn days(&self) -> impl Iterator<Item = TradeDate> + '_ {
        (0..self.day_count() as i64).map(|offset| self.start.plus_days(offset))
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> TradeDate {
        TradeDate::parse(raw).expect("test date must parse")
    }

    #[test]
    fn defaults_to_ninety_day_lookback() {
        let today = date("2024-03-10");
        let range = DateRange::resolve_as_of(None, None, today).expect("must resolve");
        assert_eq!(range.end(), today);
        assert_eq!(range.start(), date("2023-12-11"));
        assert_eq!(range.day_count(), 91);
    }

    #[test]
    fn defaults_only_the_missing_endpoint() {
        let today = date("2024-03-10");
        let range =
            DateRange::resolve_as_of(Some("2024-03-01"), None, today).expect("must resolve");
        assert_eq!(range.start(), date("2024-03-01"));
        assert_eq!(range.end(), today);
    }

    #[test]
    fn inverted_range_is_empty() {
        let today = date("2024-06-01");
        assert!(DateRange::resolve_as_of(Some("2024-03-10"), Some("2024-03-01"), today).is_none());
    }

    #[test]
    fn malformed_date_is_empty() {
        let today = date("2024-06-01");
        assert!(DateRange::resolve_as_of(Some("03/01/2024"), None, today).is_none());
        assert!(DateRange::resolve_as_of(None, Some("soon"), today).is_none());
    }

    #[test]
    fn counts_days_inclusively() {
        let range = DateRange::new(date("2024-03-01"), date("2024-03-05")).expect("valid range");
        assert_eq!(range.day_count(), 5);

        let single = DateRange::new(date("2024-03-01"), date("2024-03-01")).expect("valid range");
        assert_eq!(single.day_count(), 1);
    }

    #[test]
    fn iterates_days_in_order() {
        let range = DateRange::new(date("2024-02-28"), date("2024-03-01")).expect("valid range");
        let days: Vec<String> = range.days().map(|d| d.format_iso()).collect();
        assert_eq!(days, ["2024-02-28", "2024-02-29", "2024-03-01"]);
    }
}
