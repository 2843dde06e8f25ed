use thiserror::Error;

/// Validation errors exposed by `mocktick-core`.
///
/// The ticker variants display the exact field-level messages the form layer
/// shows next to the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ticker symbol is required.")]
    TickerRequired,
    #[error("Ticker symbol too long.")]
    TickerTooLong { len: usize, max: usize },
    #[error("Invalid ticker symbol format.")]
    TickerInvalidFormat { ch: char, index: usize },

    #[error("date must be ISO 8601 YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be positive")]
    NonPositiveValue { field: &'static str },

    #[error("bar low must not exceed open or close")]
    BarLowAboveBody,
    #[error("bar high must not fall below open or close")]
    BarHighBelowBody,
}
