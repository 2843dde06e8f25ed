use std::future::Future;
use std::pin::Pin;

use crate::catalog::TickerCatalog;
use crate::data_source::{
    HistoryRequest, MarketData, SearchMatches, SearchRequest, SourceError,
};
use crate::domain::HistorySeries;
use crate::generator::HistoryGenerator;
use crate::simulation::{Fault, SimulationPolicy};
use crate::ValidationError;

/// The in-process market-data source: generated history plus catalog
/// search, shaped by a [`SimulationPolicy`].
#[derive(Debug, Clone)]
pub struct MockMarketData {
    generator: HistoryGenerator,
    catalog: TickerCatalog,
    policy: SimulationPolicy,
}

impl Default for MockMarketData {
    fn default() -> Self {
        Self {
            generator: HistoryGenerator::new(),
            catalog: TickerCatalog::builtin(),
            policy: SimulationPolicy::standard(),
        }
    }
}

impl MockMarketData {
    pub fn new(generator: HistoryGenerator, catalog: TickerCatalog, policy: SimulationPolicy) -> Self {
        Self {
            generator,
            catalog,
            policy,
        }
    }

    pub fn with_policy(policy: SimulationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> &SimulationPolicy {
        &self.policy
    }
}

impl MarketData for MockMarketData {
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HistorySeries, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            self.policy.delay_history().await;

            match self.policy.fault_for(&req.ticker) {
                Some(Fault::EmptyHistory) => {
                    return Ok(HistorySeries::empty(req.ticker, req.range));
                }
                Some(Fault::Outage) => {
                    return Err(SourceError::simulated_outage(&req.ticker));
                }
                None => {}
            }

            self.generator
                .generate(&req.ticker, &req.range)
                .map_err(validation_to_error)
        })
    }

    fn search<'a>(
        &'a self,
        req: SearchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<SearchMatches, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            self.policy.delay_search().await;

            let results = self.catalog.search_with_limit(&req.query, req.limit);
            Ok(SearchMatches {
                query: req.query,
                results,
            })
        })
    }
}

fn validation_to_error(error: ValidationError) -> SourceError {
    SourceError::internal(error.to_string())
}
