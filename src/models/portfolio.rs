//! Portfolio model
//!
//! Holdings and performance points shown on the portfolio dashboard.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A position in the sample portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub shares: u32,
    pub avg_price: Money,
    pub current_price: Money,
    pub value: Money,
    /// Unrealized gain in currency
    pub change: Money,
    pub change_percent: f64,
    /// Share of the portfolio, in percent
    pub allocation: f64,
}

impl Holding {
    pub fn is_up(&self) -> bool {
        !self.change.is_negative()
    }
}

/// A point on the performance chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// Short date label ("1/15")
    pub date: String,
    pub value: Money,
}

/// A slice of the allocation breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSlice {
    pub symbol: String,
    pub percent: f64,
    /// Hex colour used by the chart ("#10B981")
    pub color: &'static str,
}

/// Chart colour for a symbol, with a fallback for unknown ones
pub fn color_for_symbol(symbol: &str) -> &'static str {
    match symbol {
        "AAPL" => "#10B981",
        "TSLA" => "#F59E0B",
        "MSFT" => "#3B82F6",
        "GOOGL" => "#EF4444",
        _ => "#8B5CF6",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_colors() {
        assert_eq!(color_for_symbol("AAPL"), "#10B981");
        assert_eq!(color_for_symbol("NVDA"), "#8B5CF6");
    }
}
