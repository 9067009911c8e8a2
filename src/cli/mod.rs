//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the feeds and services.

pub mod market;
pub mod news;
pub mod newsletter;
pub mod portfolio;
pub mod register;

use std::io;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::{InvestPaths, Settings};
use crate::error::InvestResult;
use crate::export::{export_json, export_yaml, Snapshot};

pub use market::{handle_market_command, MarketArgs};
pub use news::{handle_news_command, NewsArgs};
pub use newsletter::{handle_newsletter_command, NewsletterArgs};
pub use portfolio::{handle_portfolio_command, PortfolioArgs};
pub use register::handle_register_command;

/// Output format for the read-only section commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// Write a snapshot to stdout in a structured format
pub(crate) fn write_snapshot<T: Serialize>(
    format: OutputFormat,
    snapshot: &Snapshot<T>,
) -> InvestResult<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => export_json(snapshot, &mut stdout, true),
        OutputFormat::Yaml => export_yaml(snapshot, &mut stdout),
        OutputFormat::Table => Ok(()),
    }
}

/// Show paths and effective settings
pub fn handle_config_command(paths: &InvestPaths, settings: &Settings) -> InvestResult<()> {
    println!("InvestPro Configuration");
    println!("=======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Refresh interval:  {} ms", settings.refresh_interval_ms);
    println!("  Tick rate:         {} ms", settings.tick_rate_ms);
    println!("  Default timeframe: {}", settings.default_timeframe);
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Show balance:      {}", settings.show_balance);
    println!("  Log level:         {}", settings.log_level);
    Ok(())
}
