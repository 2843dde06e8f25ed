use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use mocktick_core::{Envelope, EnvelopeMeta, MarketData, SearchRequest, TickerEntry};

use crate::cli::SearchArgs;
use crate::error::CliError;

use super::CommandOutput;

#[derive(Debug, Serialize)]
pub struct SearchData {
    pub query: String,
    pub results: Vec<TickerEntry>,
}

pub async fn run(
    args: &SearchArgs,
    source: Arc<dyn MarketData>,
) -> Result<Envelope<CommandOutput>, CliError> {
    let request = SearchRequest::new(args.query.as_str(), args.limit)
        .map_err(|error| CliError::Command(error.to_string()))?;

    let started = Instant::now();
    let matches = source
        .search(request)
        .await
        .map_err(|error| CliError::Command(error.to_string()))?;
    let mut meta = EnvelopeMeta::new(started.elapsed().as_millis() as u64, true);

    if matches.results.is_empty() {
        meta.push_warning(format!("no tickers match '{}'", matches.query));
    }

    let data = CommandOutput::Search(SearchData {
        query: matches.query,
        results: matches.results,
    });
    Ok(Envelope::success(meta, data))
}
