//! CLI argument definitions for mocktick.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `history` | Generate daily OHLCV history for a ticker |
//! | `search` | Search the ticker reference set |
//!
//! # Examples
//!
//! ```bash
//! # Last 90 days for Apple, as a table
//! mocktick history AAPL
//!
//! # Explicit range, JSON output
//! mocktick history MSFT --start 2024-03-01 --end 2024-03-29 --format json --pretty
//!
//! # Autocomplete lookup
//! mocktick search semi
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Deterministic mock market-data CLI.
///
/// Generates reproducible daily OHLCV history from an in-process mock
/// source; no network, no API keys, no persistence.
#[derive(Debug, Parser)]
#[command(
    name = "mocktick",
    author,
    version,
    about = "Deterministic mock market-data CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Sleep through the simulated provider latency window before
    /// answering, as the interactive demo does.
    #[arg(long, global = true, default_value_t = false)]
    pub simulate_latency: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate daily OHLCV history for a ticker.
    History(HistoryArgs),
    /// Search the ticker reference set.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Ticker symbol (e.g. AAPL, BRK.A, ^GSPC).
    pub ticker: String,

    /// Range start, YYYY-MM-DD. Defaults to 90 days before today (UTC).
    #[arg(long)]
    pub start: Option<String>,

    /// Range end, YYYY-MM-DD. Defaults to today (UTC).
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text query matched against symbols and company names.
    pub query: String,

    /// Maximum number of matches (hard-capped at 10).
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}
