//! Caller-side fetch coordination.
//!
//! The presentation layer issues one logical fetch at a time: while a fetch
//! is pending the view is `Loading` (any previously loaded rows are already
//! gone, so a failure can never sit next to stale data), and when fetches
//! overlap only the newest one is allowed to publish its outcome.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::data_source::{HistoryRequest, MarketData, SourceError};
use crate::domain::{DateRange, HistorySeries, Ticker};

/// What the caller should currently display.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    Idle,
    Loading {
        ticker: Ticker,
    },
    Loaded(HistorySeries),
    /// Successful fetch, zero records. Not a failure.
    NoData {
        ticker: Ticker,
        range: DateRange,
    },
    Failed {
        ticker: Ticker,
        error: SourceError,
    },
}

impl SessionView {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Single-fetch-in-flight wrapper around a [`MarketData`] source.
pub struct FetchSession {
    source: Arc<dyn MarketData>,
    generation: AtomicU64,
    view: Mutex<SessionView>,
}

impl FetchSession {
    pub fn new(source: Arc<dyn MarketData>) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
            view: Mutex::new(SessionView::Idle),
        }
    }

    pub fn view(&self) -> SessionView {
        self.view
            .lock()
            .expect("session view lock should not be poisoned")
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.view().is_loading()
    }

    /// Fetch history for `ticker` over `range` and publish the outcome.
    ///
    /// If a newer fetch starts while this one is pending, this one's result
    /// is discarded and the returned view reflects the newer state
    /// (last-write-wins).
    pub async fn fetch(&self, ticker: Ticker, range: DateRange) -> SessionView {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut view = self
                .view
                .lock()
                .expect("session view lock should not be poisoned");
            *view = SessionView::Loading {
                ticker: ticker.clone(),
            };
        }

        let outcome = self
            .source
            .history(HistoryRequest::new(ticker.clone(), range))
            .await;

        let mut view = self
            .view
            .lock()
            .expect("session view lock should not be poisoned");

        // A newer fetch owns the view now; keep its state.
        if self.generation.load(Ordering::SeqCst) != generation {
            return view.clone();
        }

        *view = match outcome {
            Ok(series) if series.is_empty() => SessionView::NoData { ticker, range },
            Ok(series) => SessionView::Loaded(series),
            Err(error) => SessionView::Failed { ticker, error },
        };
        view.clone()
    }
}
