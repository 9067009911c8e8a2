//! Portfolio display formatting
//!
//! Holdings table, headline totals and the allocation breakdown.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_percent, Holding};
use crate::services::{PortfolioService, HIDDEN_BALANCE};

use super::format::{direction_arrow, format_bar};

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Shares")]
    shares: u32,
    #[tabled(rename = "Avg Price")]
    avg_price: String,
    #[tabled(rename = "Price")]
    current_price: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Gain")]
    change: String,
}

/// Format holdings with the totals header and allocation bars
///
/// When `show_balance` is false every monetary figure is masked; share
/// counts and percentages stay visible.
pub fn format_portfolio(holdings: &[Holding], show_balance: bool, symbol: &str) -> String {
    if holdings.is_empty() {
        return "No holdings.".to_string();
    }

    let service = PortfolioService::new(holdings);
    let summary = service.summary();
    let money = |m: crate::models::Money| {
        if show_balance {
            m.format_grouped(symbol)
        } else {
            HIDDEN_BALANCE.to_string()
        }
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Total Portfolio Value: {}\n",
        service.balance_label(show_balance, symbol)
    ));
    output.push_str(&format!(
        "Total Gain: {} ({})\n\n",
        if show_balance {
            summary.total_gain.format_signed(symbol)
        } else {
            HIDDEN_BALANCE.to_string()
        },
        format_percent(summary.total_gain_percent)
    ));

    let rows = holdings.iter().map(|h| HoldingRow {
        symbol: h.symbol.clone(),
        name: h.name.clone(),
        shares: h.shares,
        avg_price: money(h.avg_price),
        current_price: money(h.current_price),
        value: money(h.value),
        change: format!(
            "{} {}",
            direction_arrow(h.is_up()),
            format_percent(h.change_percent)
        ),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str("\nAllocation\n");
    for slice in service.allocation() {
        output.push_str(&format!(
            "{:<6} {} {:>5.1}%\n",
            slice.symbol,
            format_bar(slice.percent, 100.0, 20),
            slice.percent
        ));
    }

    output
}
