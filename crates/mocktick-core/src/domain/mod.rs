//! Canonical domain types for mocktick.
//!
//! All models validate their invariants at construction time and carry full
//! serde support. The date types guarantee their wire formats: [`TradeDate`]
//! is always `YYYY-MM-DD`, [`UtcDateTime`] is always RFC3339 UTC.

mod date;
mod models;
mod range;
mod ticker;

pub use date::{TradeDate, UtcDateTime};
pub use models::{DailyBar, HistorySeries};
pub use range::{DateRange, DEFAULT_LOOKBACK_DAYS};
pub use ticker::Ticker;
