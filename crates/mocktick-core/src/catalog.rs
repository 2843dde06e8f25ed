use serde::{Deserialize, Serialize};

use crate::domain::Ticker;

/// Hard cap on search matches, regardless of the requested limit.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// One row of the ticker reference set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerEntry {
    pub symbol: Ticker,
    pub name: String,
}

impl TickerEntry {
    pub fn new(symbol: Ticker, name: impl Into<String>) -> Self {
        Self {
            symbol,
            name: name.into(),
        }
    }
}

/// Immutable ticker lookup table backing autocomplete search.
///
/// The table is a plain value handed to whoever needs it, so tests can
/// substitute fixtures instead of patching a process-wide singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerCatalog {
    entries: Vec<TickerEntry>,
}

impl TickerCatalog {
    pub fn new(entries: Vec<TickerEntry>) -> Self {
        Self { entries }
    }

    /// The built-in reference set, including the `NODATA` / `ERROR`
    /// contract-test rows.
    pub fn builtin() -> Self {
        let entries = [
            ("AAPL", "Apple Inc."),
            ("GOOGL", "Alphabet Inc."),
            ("MSFT", "Microsoft Corporation"),
            ("AMZN", "Amazon.com, Inc."),
            ("NVDA", "NVIDIA Corporation"),
            ("TSLA", "Tesla, Inc."),
            ("META", "Meta Platforms, Inc."),
            ("BRK.A", "Berkshire Hathaway Inc."),
            ("JPM", "JPMorgan Chase & Co."),
            ("V", "Visa Inc."),
            ("DIS", "The Walt Disney Company"),
            ("NFLX", "Netflix, Inc."),
            ("PYPL", "PayPal Holdings, Inc."),
            ("ADBE", "Adobe Inc."),
            ("CRM", "Salesforce, Inc."),
            ("NODATA", "No Data Corp"),
            ("ERROR", "Error Inc."),
            ("TSM", "Taiwan Semiconductor Manufacturing Company"),
            ("2330.TW", "台積電 (TSMC)"),
        ]
        .into_iter()
        .map(|(symbol, name)| {
            TickerEntry::new(
                Ticker::parse(symbol).expect("builtin catalog symbols are valid"),
                name,
            )
        })
        .collect();

        Self::new(entries)
    }

    pub fn entries(&self) -> &[TickerEntry] {
        &self.entries
    }

    /// Case-insensitive substring match over symbol or name, in catalog
    /// order, capped at [`MAX_SEARCH_RESULTS`]. An empty query matches
    /// nothing.
    pub fn search(&self, query: &str) -> Vec<TickerEntry> {
        self.search_with_limit(query, MAX_SEARCH_RESULTS)
    }

    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<TickerEntry> {
        if query.is_empty() {
            return Vec::new();
        }

        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry
                    .symbol
                    .as_str()
                    .to_lowercase()
                    .contains(&query_lower)
                    || entry.name.to_lowercase().contains(&query_lower)
            })
            .take(limit.min(MAX_SEARCH_RESULTS))
            .cloned()
            .collect()
    }
}

impl Default for TickerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
