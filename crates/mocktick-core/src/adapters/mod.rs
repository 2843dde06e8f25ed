//! Source adapters.
//!
//! One adapter exists: the in-process mock. The [`crate::MarketData`] seam
//! is where a real provider integration would slot in.

mod mock;

pub use mock::MockMarketData;
