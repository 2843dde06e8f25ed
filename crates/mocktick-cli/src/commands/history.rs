use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use mocktick_core::{
    DailyBar, DateRange, Envelope, EnvelopeError, EnvelopeMeta, FetchSession, MarketData,
    SessionView, Ticker,
};

use crate::cli::HistoryArgs;
use crate::error::CliError;

use super::CommandOutput;

#[derive(Debug, Serialize)]
pub struct HistoryData {
    pub ticker: Ticker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<DateRange>,
    pub bars: Vec<DailyBar>,
}

pub async fn run(
    args: &HistoryArgs,
    source: Arc<dyn MarketData>,
) -> Result<Envelope<CommandOutput>, CliError> {
    let ticker = Ticker::parse(&args.ticker)?;

    // An unresolvable range is an empty result, not an error.
    let Some(range) = DateRange::resolve(args.start.as_deref(), args.end.as_deref()) else {
        let mut meta = EnvelopeMeta::new(0, true);
        meta.push_warning(format!(
            "no data for ticker {ticker}: date range is empty or invalid"
        ));
        let data = CommandOutput::History(HistoryData {
            ticker,
            range: None,
            bars: Vec::new(),
        });
        return Ok(Envelope::success(meta, data));
    };

    let session = FetchSession::new(source);
    let started = Instant::now();
    let view = session.fetch(ticker, range).await;
    let mut meta = EnvelopeMeta::new(started.elapsed().as_millis() as u64, true);

    match view {
        SessionView::Loaded(series) => {
            let data = CommandOutput::History(HistoryData {
                ticker: series.ticker,
                range: Some(series.range),
                bars: series.bars,
            });
            Ok(Envelope::success(meta, data))
        }
        SessionView::NoData { ticker, range } => {
            meta.push_warning(format!(
                "No historical data found for ticker: {ticker} between {} and {}",
                range.start(),
                range.end()
            ));
            let data = CommandOutput::History(HistoryData {
                ticker,
                range: Some(range),
                bars: Vec::new(),
            });
            Ok(Envelope::success(meta, data))
        }
        SessionView::Failed { ticker, error } => {
            let envelope_error = EnvelopeError::from(&error);
            let data = CommandOutput::History(HistoryData {
                ticker,
                range: Some(range),
                bars: Vec::new(),
            });
            Ok(Envelope::with_error(meta, data, envelope_error))
        }
        view @ (SessionView::Idle | SessionView::Loading { .. }) => Err(CliError::Command(
            format!("fetch finished in unexpected session state: {view:?}"),
        )),
    }
}
