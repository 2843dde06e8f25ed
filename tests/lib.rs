// Shared helpers for the behavior tests.
pub use mocktick_core::{
    DateRange, HistoryGenerator, MockMarketData, SimulationPolicy, Ticker, TradeDate,
};

pub fn ticker(raw: &str) -> Ticker {
    Ticker::parse(raw).expect("test ticker must parse")
}

pub fn date(raw: &str) -> TradeDate {
    TradeDate::parse(raw).expect("test date must parse")
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(date(start), date(end)).expect("test range must be valid")
}
