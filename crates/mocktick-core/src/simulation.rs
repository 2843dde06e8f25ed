use std::time::Duration;

use crate::domain::Ticker;

/// Fault injected for a ticker by the simulation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The source answers successfully with zero records.
    EmptyHistory,
    /// The source fails as if the upstream provider broke.
    Outage,
}

/// Artificial latency window: `base` plus up to `jitter` of random extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyBand {
    pub base: Duration,
    pub jitter: Duration,
}

impl LatencyBand {
    pub const fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    fn sample(self) -> Duration {
        let extra_ms = (self.jitter.as_millis() as f64 * fastrand::f64()) as u64;
        self.base + Duration::from_millis(extra_ms)
    }
}

/// Simulation behavior of the mock source: artificial latency and
/// per-ticker fault injection.
///
/// The `NODATA` / `ERROR` contract tickers live in the [`standard`]
/// policy's fault lists rather than being string-matched inside the
/// generator, so production callers can run with [`disabled`] and tests
/// can inject their own sentinels.
///
/// [`standard`]: Self::standard
/// [`disabled`]: Self::disabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationPolicy {
    pub history_latency: Option<LatencyBand>,
    pub search_latency: Option<LatencyBand>,
    pub empty_tickers: Vec<Ticker>,
    pub outage_tickers: Vec<Ticker>,
}

impl SimulationPolicy {
    /// Contract sentinels active, no artificial latency. Default for tests
    /// and non-interactive callers.
    pub fn standard() -> Self {
        Self {
            history_latency: None,
            search_latency: None,
            empty_tickers: vec![sentinel("NODATA")],
            outage_tickers: vec![sentinel("ERROR")],
        }
    }

    /// Contract sentinels plus the interactive-demo latency windows
    /// (history 300-800ms, search 100-300ms).
    pub fn realistic() -> Self {
        Self {
            history_latency: Some(LatencyBand::new(
                Duration::from_millis(300),
                Duration::from_millis(500),
            )),
            search_latency: Some(LatencyBand::new(
                Duration::from_millis(100),
                Duration::from_millis(200),
            )),
            ..Self::standard()
        }
    }

    /// No latency, no sentinels: every valid ticker generates data.
    pub fn disabled() -> Self {
        Self {
            history_latency: None,
            search_latency: None,
            empty_tickers: Vec::new(),
            outage_tickers: Vec::new(),
        }
    }

    pub fn fault_for(&self, ticker: &Ticker) -> Option<Fault> {
        if self.outage_tickers.contains(ticker) {
            return Some(Fault::Outage);
        }
        if self.empty_tickers.contains(ticker) {
            return Some(Fault::EmptyHistory);
        }
        None
    }

    pub async fn delay_history(&self) {
        if let Some(band) = self.history_latency {
            tokio::time::sleep(band.sample()).await;
        }
    }

    pub async fn delay_search(&self) {
        if let Some(band) = self.search_latency {
            tokio::time::sleep(band.sample()).await;
        }
    }
}

impl Default for SimulationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn sentinel(raw: &str) -> Ticker {
    Ticker::parse(raw).expect("sentinel tickers are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_policy_keeps_contract_sentinels() {
        let policy = SimulationPolicy::standard();
        assert_eq!(policy.fault_for(&sentinel("NODATA")), Some(Fault::EmptyHistory));
        assert_eq!(policy.fault_for(&sentinel("ERROR")), Some(Fault::Outage));
        assert_eq!(policy.fault_for(&sentinel("AAPL")), None);
    }

    #[test]
    fn disabled_policy_injects_nothing() {
        let policy = SimulationPolicy::disabled();
        assert_eq!(policy.fault_for(&sentinel("NODATA")), None);
        assert_eq!(policy.fault_for(&sentinel("ERROR")), None);
        assert!(policy.history_latency.is_none());
    }

    #[test]
    fn custom_fault_lists_are_injectable() {
        let policy = SimulationPolicy {
            outage_tickers: vec![sentinel("FLAKY")],
            ..SimulationPolicy::disabled()
        };
        assert_eq!(policy.fault_for(&sentinel("FLAKY")), Some(Fault::Outage));
        assert_eq!(policy.fault_for(&sentinel("ERROR")), None);
    }

    #[test]
    fn latency_sample_stays_inside_band() {
        let band = LatencyBand::new(Duration::from_millis(100), Duration::from_millis(200));
        for _ in 0..100 {
            let sampled = band.sample();
            assert!(sampled >= Duration::from_millis(100));
            assert!(sampled <= Duration::from_millis(300));
        }
    }
}
