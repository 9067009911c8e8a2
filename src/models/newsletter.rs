//! Newsletter model
//!
//! Topics a visitor can subscribe to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A newsletter topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preference {
    MarketUpdates,
    InvestmentTips,
    PortfolioAlerts,
    SecurityUpdates,
}

impl Preference {
    pub const ALL: [Preference; 4] = [
        Self::MarketUpdates,
        Self::InvestmentTips,
        Self::PortfolioAlerts,
        Self::SecurityUpdates,
    ];

    /// Stable identifier ("market-updates")
    pub fn id(&self) -> &'static str {
        match self {
            Self::MarketUpdates => "market-updates",
            Self::InvestmentTips => "investment-tips",
            Self::PortfolioAlerts => "portfolio-alerts",
            Self::SecurityUpdates => "security-updates",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MarketUpdates => "Market Updates",
            Self::InvestmentTips => "Investment Tips",
            Self::PortfolioAlerts => "Portfolio Alerts",
            Self::SecurityUpdates => "Security Updates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MarketUpdates => "Daily market summaries and analysis",
            Self::InvestmentTips => "Expert strategies and insights",
            Self::PortfolioAlerts => "Performance notifications",
            Self::SecurityUpdates => "Account and platform security news",
        }
    }

    /// Parse from id or label
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s) || p.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_id_or_label() {
        assert_eq!(Preference::parse("portfolio-alerts"), Some(Preference::PortfolioAlerts));
        assert_eq!(Preference::parse("Investment Tips"), Some(Preference::InvestmentTips));
        assert_eq!(Preference::parse("weather"), None);
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Preference::MarketUpdates).unwrap();
        assert_eq!(json, "\"market-updates\"");
    }
}
