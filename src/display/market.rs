//! Market display formatting
//!
//! Renders a quote snapshot and the summary strip as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_percent, MarketStat, Quote, Timeframe};

use super::format::direction_arrow;

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "%")]
    percent: String,
    #[tabled(rename = "Volume")]
    volume: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Change")]
    change: String,
}

/// Format a quote snapshot as a table, headed by the timeframe
pub fn format_quote_table(quotes: &[Quote], timeframe: Timeframe, symbol: &str) -> String {
    if quotes.is_empty() {
        return "No quotes available.".to_string();
    }

    let rows = quotes.iter().map(|q| QuoteRow {
        symbol: q.symbol.clone(),
        name: q.name.clone(),
        price: q.price.format_with_symbol(symbol),
        change: format!("{} {}", direction_arrow(q.is_up()), q.change.format_signed(symbol)),
        percent: format_percent(q.change_percent),
        volume: q.volume.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("Market Overview ({})\n{}", timeframe, table)
}

/// Format the market summary strip
pub fn format_market_stats(stats: &[MarketStat]) -> String {
    let rows = stats.iter().map(|s| StatRow {
        label: s.label.clone(),
        value: s.value.clone(),
        change: s.change.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
