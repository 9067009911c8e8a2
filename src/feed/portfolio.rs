//! Sample portfolio
//!
//! The dashboard shows a fixed demo account; nothing here is live.

use crate::models::{Holding, Money, PerformancePoint};

/// Demo holdings, largest allocation first
pub fn sample_holdings() -> Vec<Holding> {
    vec![
        holding("AAPL", "Apple Inc.", 250, 16543, 17845, 4461250, 325500, 7.88, 35.2),
        holding("TSLA", "Tesla Inc.", 100, 24567, 24832, 2483200, 26500, 1.08, 19.6),
        holding("MSFT", "Microsoft Corp.", 85, 39821, 41278, 3508630, 123845, 3.66, 27.7),
        holding("GOOGL", "Alphabet Inc.", 150, 13892, 14265, 2139750, 55950, 2.69, 16.9),
    ]
}

/// Weekly account value for the performance chart
pub fn performance_history() -> Vec<PerformancePoint> {
    [
        ("1/1", 115_000),
        ("1/8", 118_500),
        ("1/15", 121_200),
        ("1/22", 119_800),
        ("1/29", 123_400),
        ("2/5", 125_928),
    ]
    .into_iter()
    .map(|(date, dollars)| PerformancePoint {
        date: date.to_string(),
        value: Money::from_cents(dollars * 100),
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn holding(
    symbol: &str,
    name: &str,
    shares: u32,
    avg_cents: i64,
    current_cents: i64,
    value_cents: i64,
    change_cents: i64,
    change_percent: f64,
    allocation: f64,
) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        name: name.to_string(),
        shares,
        avg_price: Money::from_cents(avg_cents),
        current_price: Money::from_cents(current_cents),
        value: Money::from_cents(value_cents),
        change: Money::from_cents(change_cents),
        change_percent,
        allocation,
    }
}
