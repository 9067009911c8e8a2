//! Display formatting for terminal output
//!
//! Renders quotes, holdings and headlines as tables for the
//! non-interactive subcommands.

pub mod format;
pub mod market;
pub mod news;
pub mod portfolio;

pub use market::{format_market_stats, format_quote_table};
pub use news::format_news_table;
pub use portfolio::format_portfolio;
