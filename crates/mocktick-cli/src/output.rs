use mocktick_core::Envelope;

use crate::cli::OutputFormat;
use crate::commands::CommandOutput;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<CommandOutput>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(envelope),
    }

    Ok(())
}

fn render_table(envelope: &Envelope<CommandOutput>) {
    println!("generated_at: {}", envelope.meta.generated_at);
    println!("latency_ms  : {}", envelope.meta.latency_ms);
    println!("simulated   : {}", envelope.meta.simulated);

    if !envelope.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &envelope.meta.warnings {
            println!("  - {warning}");
        }
    }

    println!();
    match &envelope.data {
        CommandOutput::History(data) => {
            println!("ticker: {}", data.ticker);
            if let Some(range) = &data.range {
                println!("range : {range}");
            }
            if !data.bars.is_empty() {
                println!();
                println!(
                    "{:<12} {:>10} {:>10} {:>10} {:>10} {:>12}",
                    "date", "open", "high", "low", "close", "volume"
                );
                for bar in &data.bars {
                    println!(
                        "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12}",
                        bar.date.format_iso(),
                        bar.open,
                        bar.high,
                        bar.low,
                        bar.close,
                        bar.volume
                    );
                }
            }
        }
        CommandOutput::Search(data) => {
            println!("query : {}", data.query);
            if !data.results.is_empty() {
                println!();
                println!("{:<10} name", "symbol");
                for entry in &data.results {
                    println!("{:<10} {}", entry.symbol, entry.name);
                }
            }
        }
    }

    if !envelope.errors.is_empty() {
        println!();
        println!("errors:");
        for error in &envelope.errors {
            println!("  - {}: {}", error.code, error.message);
        }
    }
}
