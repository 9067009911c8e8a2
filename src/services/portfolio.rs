//! Portfolio service
//!
//! Derived figures for the dashboard: totals, gain percentage and the
//! allocation breakdown.

use serde::Serialize;

use crate::models::portfolio::color_for_symbol;
use crate::models::{AllocationSlice, Holding, Money};

/// Mask shown in place of the balance when it is hidden
pub const HIDDEN_BALANCE: &str = "••••••";

/// Headline figures for a set of holdings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_value: Money,
    pub total_gain: Money,
    /// Gain relative to cost basis, in percent
    pub total_gain_percent: f64,
}

/// Service for portfolio figures
pub struct PortfolioService<'a> {
    holdings: &'a [Holding],
}

impl<'a> PortfolioService<'a> {
    pub fn new(holdings: &'a [Holding]) -> Self {
        Self { holdings }
    }

    pub fn holdings(&self) -> &'a [Holding] {
        self.holdings
    }

    /// Totals across all holdings
    pub fn summary(&self) -> PortfolioSummary {
        let total_value: Money = self.holdings.iter().map(|h| h.value).sum();
        let total_gain: Money = self.holdings.iter().map(|h| h.change).sum();
        let cost_basis = total_value - total_gain;

        let total_gain_percent = if cost_basis.is_zero() {
            0.0
        } else {
            total_gain.as_f64() / cost_basis.as_f64() * 100.0
        };

        PortfolioSummary {
            total_value,
            total_gain,
            total_gain_percent,
        }
    }

    /// Allocation slices in holding order
    pub fn allocation(&self) -> Vec<AllocationSlice> {
        self.holdings
            .iter()
            .map(|h| AllocationSlice {
                symbol: h.symbol.clone(),
                percent: h.allocation,
                color: color_for_symbol(&h.symbol),
            })
            .collect()
    }

    /// Total value as shown on the dashboard, or the mask when hidden
    pub fn balance_label(&self, show_balance: bool, symbol: &str) -> String {
        if show_balance {
            self.summary().total_value.format_grouped(symbol)
        } else {
            HIDDEN_BALANCE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::sample_holdings;
    use crate::models::format_percent;

    #[test]
    fn test_summary_of_sample_portfolio() {
        let holdings = sample_holdings();
        let summary = PortfolioService::new(&holdings).summary();

        assert_eq!(summary.total_value, Money::from_cents(12_592_830));
        assert_eq!(summary.total_gain, Money::from_cents(531_795));
        assert_eq!(format_percent(summary.total_gain_percent), "+4.41%");
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = PortfolioService::new(&[]).summary();
        assert!(summary.total_value.is_zero());
        assert_eq!(summary.total_gain_percent, 0.0);
    }

    #[test]
    fn test_balance_label() {
        let holdings = sample_holdings();
        let service = PortfolioService::new(&holdings);
        assert_eq!(service.balance_label(true, "$"), "$125,928.30");
        assert_eq!(service.balance_label(false, "$"), HIDDEN_BALANCE);
    }

    #[test]
    fn test_allocation_slices() {
        let holdings = sample_holdings();
        let slices = PortfolioService::new(&holdings).allocation();
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[1].symbol, "TSLA");
        assert_eq!(slices[1].color, "#F59E0B");
        let total: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((total - 99.4).abs() < 1e-9);
    }
}
