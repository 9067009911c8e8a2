//! Market CLI command

use chrono::Utc;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_market_stats, format_quote_table};
use crate::error::{InvestError, InvestResult};
use crate::export::{MarketSnapshot, Snapshot};
use crate::feed::{market_summary, QuoteSource, SimulatedMarket};
use crate::models::Timeframe;

use super::{write_snapshot, OutputFormat};

/// Arguments for `investpro market`
#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Timeframe label (1D, 1W, 1M, 3M, 1Y); defaults to the configured one
    #[arg(short, long)]
    pub timeframe: Option<String>,
    /// Seed for reproducible quotes
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Print one snapshot of the simulated market
pub fn handle_market_command(settings: &Settings, args: MarketArgs) -> InvestResult<()> {
    let timeframe = match args.timeframe.as_deref() {
        Some(label) => Timeframe::parse(label).ok_or_else(|| InvestError::unknown("timeframe", label))?,
        None => settings.default_timeframe,
    };

    let mut market = match args.seed {
        Some(seed) => SimulatedMarket::with_seed(seed),
        None => SimulatedMarket::new(),
    };
    let quotes = market.snapshot();
    tracing::debug!(timeframe = %timeframe, seeded = args.seed.is_some(), "market snapshot");

    match args.format {
        OutputFormat::Table => {
            println!("{}", format_quote_table(&quotes, timeframe, &settings.currency_symbol));
            println!("{}", format_market_stats(&market_summary()));
            println!("As of {}", Utc::now().format("%H:%M:%S UTC"));
            Ok(())
        }
        format => write_snapshot(
            format,
            &Snapshot::new(
                "market",
                MarketSnapshot {
                    timeframe,
                    quotes,
                    stats: market_summary(),
                },
            ),
        ),
    }
}
