//! Market-data source contract and request/response types.
//!
//! [`MarketData`] is the seam between the core and whatever renders the
//! data: the CLI here, a chart/table UI in the original. Implementations
//! must be `Send + Sync`; methods return boxed futures so the trait stays
//! object-safe.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::catalog::{TickerEntry, MAX_SEARCH_RESULTS};
use crate::domain::{DateRange, HistorySeries, Ticker};

/// Source-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Request failed structural validation before reaching the source.
    InvalidRequest,
    /// The configured fault policy injected an upstream failure.
    SimulatedOutage,
    Internal,
}

/// Structured source error surfaced to callers as a user-visible failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn simulated_outage(ticker: &Ticker) -> Self {
        Self {
            kind: SourceErrorKind::SimulatedOutage,
            message: format!("simulated upstream error for ticker '{ticker}'"),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::SimulatedOutage => "source.simulated_outage",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request payload for the history endpoint.
///
/// Both fields are already-validated domain types, so construction cannot
/// fail; an unresolvable range never reaches this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub ticker: Ticker,
    pub range: DateRange,
}

impl HistoryRequest {
    pub fn new(ticker: Ticker, range: DateRange) -> Self {
        Self { ticker, range }
    }
}

/// Request payload for the search endpoint.
///
/// An empty query is valid and yields zero matches; a zero limit is a
/// request error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, limit: usize) -> Result<Self, SourceError> {
        if limit == 0 {
            return Err(SourceError::invalid_request(
                "search request limit must be greater than zero",
            ));
        }
        Ok(Self {
            query: query.into(),
            limit,
        })
    }

    pub fn with_default_limit(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: MAX_SEARCH_RESULTS,
        }
    }
}

/// Normalized search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatches {
    pub query: String,
    pub results: Vec<TickerEntry>,
}

/// Source contract consumed by the presentation layer.
pub trait MarketData: Send + Sync {
    /// Fetch daily OHLCV history for a ticker over a resolved range.
    ///
    /// An empty series is a valid outcome, distinct from an error.
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HistorySeries, SourceError>> + Send + 'a>>;

    /// Search the ticker reference set. At most
    /// [`MAX_SEARCH_RESULTS`] matches.
    fn search<'a>(
        &'a self,
        req: SearchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<SearchMatches, SourceError>> + Send + 'a>>;
}
