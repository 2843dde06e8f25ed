//! Behavior tests for the history generator and the date range resolver.
//!
//! These pin the externally observable contract: record counts, date
//! ordering, bar-shape invariants, volume bounds, and the resolver's
//! defaulting/failure rules.

use mocktick_tests::{date, range, ticker};

use mocktick_core::{DateRange, HistoryGenerator, DEFAULT_LOOKBACK_DAYS};

#[test]
fn every_valid_ticker_gets_exactly_one_bar_per_day() {
    // Given: a five-day inclusive range
    let r = range("2024-03-01", "2024-03-05");

    // When/Then: each ticker yields exactly five chronologically unique bars
    for raw in ["AAPL", "GOOGL", "BRK.A", "^GSPC", "2330.TW", "V"] {
        let series = HistoryGenerator::new()
            .generate(&ticker(raw), &r)
            .expect("generation must succeed");
        assert_eq!(series.bars.len(), 5, "ticker {raw}");

        for pair in series.bars.windows(2) {
            assert!(pair[0].date < pair[1].date, "ticker {raw}: dates must ascend");
        }
        assert_eq!(series.bars[0].date, date("2024-03-01"));
        assert_eq!(series.bars[4].date, date("2024-03-05"));
    }
}

#[test]
fn bars_satisfy_ohlc_and_volume_invariants() {
    // A year of data so the wide daily moves show up
    let r = range("2023-01-01", "2023-12-31");
    let series = HistoryGenerator::with_start_price(162.5)
        .generate(&ticker("NFLX"), &r)
        .expect("generation must succeed");

    assert_eq!(series.bars.len(), 365);
    for bar in &series.bars {
        assert!(bar.low <= bar.open.min(bar.close), "crossed low on {}", bar.date);
        assert!(bar.high >= bar.open.max(bar.close), "crossed high on {}", bar.date);
        assert!(bar.open > 0.0 && bar.low > 0.0);
        assert!(bar.volume >= 500_000, "volume floor on {}", bar.date);
        assert!(bar.volume < 5_500_000, "volume cap on {}", bar.date);
    }
}

#[test]
fn single_day_range_yields_single_bar() {
    let r = range("2024-03-01", "2024-03-01");
    let series = HistoryGenerator::new()
        .generate(&ticker("JPM"), &r)
        .expect("generation must succeed");
    assert_eq!(series.bars.len(), 1);
}

#[test]
fn rerun_reproduces_count_and_dates() {
    let r = range("2024-01-15", "2024-02-15");
    let t = ticker("TSLA");

    let first = HistoryGenerator::new().generate(&t, &r).expect("generation");
    let second = HistoryGenerator::new().generate(&t, &r).expect("generation");

    assert_eq!(first.bars.len(), second.bars.len());
    for (a, b) in first.bars.iter().zip(&second.bars) {
        assert_eq!(a.date, b.date);
    }
}

#[test]
fn pinned_start_price_reproduces_values_exactly() {
    let r = range("2024-01-15", "2024-02-15");
    let t = ticker("TSLA");
    let generator = HistoryGenerator::with_start_price(175.25);

    let first = generator.generate(&t, &r).expect("generation");
    let second = generator.generate(&t, &r).expect("generation");
    assert_eq!(first, second);
}

#[test]
fn different_tickers_diverge_with_the_same_start_price() {
    let r = range("2024-03-01", "2024-03-29");
    let generator = HistoryGenerator::with_start_price(170.0);

    let a = generator.generate(&ticker("AAPL"), &r).expect("generation");
    let b = generator.generate(&ticker("MSFT"), &r).expect("generation");
    assert_ne!(a.bars, b.bars);
}

#[test]
fn resolver_defaults_to_today_minus_lookback() {
    // When: no arguments are given
    let resolved = DateRange::resolve(None, None).expect("defaults must resolve");

    // Then: the span is lookback + 1 inclusive days ending today
    assert_eq!(resolved.day_count() as i64, DEFAULT_LOOKBACK_DAYS + 1);
    assert_eq!(
        resolved.end().days_since(resolved.start()),
        DEFAULT_LOOKBACK_DAYS
    );
}

#[test]
fn resolver_rejects_inverted_range_as_empty() {
    let today = date("2024-06-01");
    assert!(DateRange::resolve_as_of(Some("2024-03-10"), Some("2024-03-01"), today).is_none());
}

#[test]
fn resolver_spans_inclusively() {
    let today = date("2024-06-01");
    let resolved = DateRange::resolve_as_of(Some("2024-03-01"), Some("2024-03-05"), today)
        .expect("must resolve");
    assert_eq!(resolved.day_count(), 5);
}

#[test]
fn resolver_treats_unparseable_input_as_empty() {
    let today = date("2024-06-01");
    for bad in ["2024/03/01", "yesterday", "2024-00-10", ""] {
        assert!(
            DateRange::resolve_as_of(Some(bad), None, today).is_none(),
            "input: {bad}"
        );
        assert!(
            DateRange::resolve_as_of(None, Some(bad), today).is_none(),
            "input: {bad}"
        );
    }
}
