//! # Mocktick Core
//!
//! Domain contracts and the deterministic history generator for mocktick,
//! an in-process mock market-data source.
//!
//! This crate contains:
//! - Canonical domain models and validation ([`Ticker`], [`TradeDate`],
//!   [`DateRange`], [`DailyBar`], [`HistorySeries`])
//! - The seeded pseudo-random [`DrawSequence`] and the [`HistoryGenerator`]
//!   built on it
//! - The static [`TickerCatalog`] backing autocomplete search
//! - The [`MarketData`] source trait, its mock adapter, and the
//!   [`SimulationPolicy`] controlling artificial latency and fault
//!   injection
//! - The [`FetchSession`] caller-side coordinator (one fetch in flight,
//!   last-write-wins)
//! - The response [`Envelope`] for machine-readable output
//!
//! ## Quick start
//!
//! ```rust
//! use mocktick_core::{DateRange, HistoryGenerator, Ticker};
//!
//! fn main() -> Result<(), mocktick_core::ValidationError> {
//!     let ticker = Ticker::parse("aapl")?;
//!     let range = DateRange::resolve(Some("2024-03-01"), Some("2024-03-05"))
//!         .expect("range is well-formed");
//!
//!     let series = HistoryGenerator::new().generate(&ticker, &range)?;
//!     assert_eq!(series.bars.len(), 5);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod catalog;
pub mod data_source;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod generator;
pub mod rng;
pub mod session;
pub mod simulation;

pub use adapters::MockMarketData;
pub use catalog::{TickerCatalog, TickerEntry, MAX_SEARCH_RESULTS};
pub use data_source::{
    HistoryRequest, MarketData, SearchMatches, SearchRequest, SourceError, SourceErrorKind,
};
pub use domain::{
    DailyBar, DateRange, HistorySeries, Ticker, TradeDate, UtcDateTime, DEFAULT_LOOKBACK_DAYS,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::ValidationError;
pub use generator::{ticker_seed, HistoryGenerator};
pub use rng::DrawSequence;
pub use session::{FetchSession, SessionView};
pub use simulation::{Fault, LatencyBand, SimulationPolicy};
