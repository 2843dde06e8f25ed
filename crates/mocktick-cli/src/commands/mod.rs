pub mod history;
pub mod search;

use std::sync::Arc;

use serde::Serialize;

use mocktick_core::{Envelope, MockMarketData, SimulationPolicy};

use crate::cli::{Cli, Command};
use crate::error::CliError;

use self::history::HistoryData;
use self::search::SearchData;

/// Typed command payload carried inside the envelope.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    History(HistoryData),
    Search(SearchData),
}

pub async fn run(cli: &Cli) -> Result<Envelope<CommandOutput>, CliError> {
    let policy = if cli.simulate_latency {
        SimulationPolicy::realistic()
    } else {
        SimulationPolicy::standard()
    };
    let source = Arc::new(MockMarketData::with_policy(policy));

    match &cli.command {
        Command::History(args) => history::run(args, source).await,
        Command::Search(args) => search::run(args, source).await,
    }
}
