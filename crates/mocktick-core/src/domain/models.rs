use serde::{Deserialize, Serialize};

use crate::ValidationError;

use super::date::TradeDate;
use super::range::DateRange;
use super::ticker::Ticker;

/// One day of OHLCV data.
///
/// Construction enforces the record invariants: all prices finite and
/// positive, `low <= min(open, close)` and `high >= max(open, close)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: TradeDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyBar {
    pub fn new(
        date: TradeDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_positive("open", open)?;
        validate_positive("high", high)?;
        validate_positive("low", low)?;
        validate_positive("close", close)?;

        if low > open.min(close) {
            return Err(ValidationError::BarLowAboveBody);
        }
        if high < open.max(close) {
            return Err(ValidationError::BarHighBelowBody);
        }

        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// Daily bar series for a ticker over a resolved date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySeries {
    pub ticker: Ticker,
    pub range: DateRange,
    pub bars: Vec<DailyBar>,
}

impl HistorySeries {
    pub fn new(ticker: Ticker, range: DateRange, bars: Vec<DailyBar>) -> Self {
        Self {
            ticker,
            range,
            bars,
        }
    }

    pub fn empty(ticker: Ticker, range: DateRange) -> Self {
        Self::new(ticker, range, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}
